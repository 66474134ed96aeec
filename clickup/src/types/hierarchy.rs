//! Space → Folder → List

use serde::{Deserialize, Serialize};

use super::{Status, User};
use crate::flex::{self, FlexId};
use crate::types::task::Location;

/// Space de um workspace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub private: bool,
    pub archived: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub statuses: Vec<Status>,

    pub multiple_assignees: bool,

    /// Features habilitadas (`{"due_dates": {"enabled": true}, ...}`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,
}

/// Folder de um space
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,

    pub override_statuses: bool,
    pub hidden: bool,
    pub archived: bool,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Location>,

    /// Listas do folder (vêm embutidas em `GET /folder/{id}`)
    pub lists: Vec<List>,
}

/// Lista de tarefas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    pub archived: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Location>,

    /// `true` quando a lista herda os status do space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_statuses: Option<bool>,

    pub statuses: Vec<Status>,
}

/// Status "cor" da lista (diferente dos status das tasks)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub hide_label: bool,
}
