//! Tags de space / task

use serde::{Deserialize, Serialize};

/// Tag de um space (também embutida nas tasks)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    /// Cor do texto (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,

    /// Cor de fundo (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,

    #[serde(default, skip_serializing)]
    pub creator: Option<i64>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, fg: impl Into<String>, bg: impl Into<String>) -> Self {
        self.tag_fg = Some(fg.into());
        self.tag_bg = Some(bg.into());
        self
    }
}
