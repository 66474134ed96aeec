//! Checklists de task

use serde::{Deserialize, Serialize};

use super::User;
use crate::flex::{self, FlexId};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    pub id: String,
    pub task_id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,

    #[serde(deserialize_with = "flex::opt_i64")]
    pub resolved: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64")]
    pub unresolved: Option<i64>,

    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    pub resolved: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,
}

impl Checklist {
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.id == item_id)
    }
}
