//! Comentários de task / lista

use serde::{Deserialize, Serialize};

use super::User;
use crate::flex::{self, FlexId};

/// Comentário (o `id` chega como número ou string)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: FlexId,

    /// Blocos ricos do comentário
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<serde_json::Value>,

    pub comment_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<User>,

    pub resolved: bool,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<i64>,
}

/// Resposta de criação: `{"id": 458, "hist_id": "...", "date": 1568036964079}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentCreated {
    pub id: FlexId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hist_id: Option<String>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}
