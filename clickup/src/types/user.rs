//! Usuários, membros e o delta de assignees

use serde::{Deserialize, Serialize};

use crate::flex::FlexId;

/// Representa um usuário do ClickUp
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// ID do usuário (número na maioria dos endpoints, string em alguns)
    pub id: FlexId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Cor associada ao usuário (hex color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(
        default,
        rename = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl User {
    /// Nome para exibição: username, senão email, senão o id
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

/// Membro de workspace/lista/task (`{"user": {...}}` em alguns endpoints)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Member {
    Wrapped { user: User },
    Bare(User),
}

impl Member {
    pub fn user(&self) -> &User {
        match self {
            Member::Wrapped { user } | Member::Bare(user) => user,
        }
    }
}

/// Delta de assignees em updates de task: `{"add": [...], "rem": [...]}`
///
/// As duas chaves são sempre enviadas, mesmo vazias.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssigneesDelta {
    pub add: Vec<i64>,
    pub rem: Vec<i64>,
}

impl AssigneesDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona um assignee (sem duplicar)
    pub fn add(mut self, user_id: i64) -> Self {
        if !self.add.contains(&user_id) {
            self.add.push(user_id);
        }
        self
    }

    /// Remove um assignee (sem duplicar)
    pub fn remove(mut self, user_id: i64) -> Self {
        if !self.rem.contains(&user_id) {
            self.rem.push(user_id);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.rem.is_empty()
    }
}
