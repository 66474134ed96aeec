//! Status de tarefas do ClickUp
//!
//! IMPORTANTE: Status não são globais - cada lista pode ter seus próprios status.

use serde::{Deserialize, Serialize};

use crate::flex;

/// Representa um status de tarefa
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nome do status (e.g., "to do", "in progress", "complete")
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(
        default,
        deserialize_with = "flex::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub orderindex: Option<i64>,

    /// Tipo do status: "open", "custom", "done" ou "closed"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Status {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }

    /// `true` para status do tipo "closed" ou "done"
    pub fn is_closed(&self) -> bool {
        matches!(self.kind.as_deref(), Some("closed") | Some("done"))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_api() {
        let status: Status = serde_json::from_str(
            r##"{"status":"in progress","color":"#d3d3d3","orderindex":"1","type":"custom"}"##,
        )
        .unwrap();
        assert_eq!(status.to_string(), "in progress");
        assert_eq!(status.orderindex, Some(1));
        assert!(!status.is_closed());
    }

    #[test]
    fn test_closed_types() {
        let mut status = Status::new("complete");
        status.kind = Some("closed".to_string());
        assert!(status.is_closed());
    }
}
