//! Task types do ClickUp
//!
//! Modelo de leitura de uma tarefa (API v2). Os payloads de escrita ficam
//! em [`crate::tasks`].

use serde::{Deserialize, Serialize};

use super::{CustomField, Priority, Status, Tag, User};
use crate::flex::{self, FlexId};
use crate::types::priority::opt_priority;

/// Referência resumida a list/folder/space embutida na task
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: FlexId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Representa uma tarefa do ClickUp
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    // ==================== IDENTIFICAÇÃO ====================
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // ==================== STATUS & PRIORIDADE ====================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(deserialize_with = "opt_priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,

    pub archived: bool,

    // ==================== DATAS (ms) ====================
    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_closed: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    // ==================== PESSOAS ====================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,

    pub assignees: Vec<User>,

    pub watchers: Vec<User>,

    // ==================== TEMPO ====================
    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    // ==================== RELACIONAMENTOS ====================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    pub tags: Vec<Tag>,

    pub dependencies: Vec<TaskDependency>,

    pub linked_tasks: Vec<LinkedTask>,

    pub custom_fields: Vec<CustomField>,

    /// Presente apenas com `include_subtasks=true`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Task>,

    // ==================== HIERARQUIA ====================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Task {
    /// Nome do status atual, se houver
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.status.as_str())
    }

    /// Busca o valor de um custom field pelo id
    pub fn custom_field(&self, field_id: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|f| f.id == field_id)
    }
}

/// Dependência entre tarefas
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDependency {
    pub task_id: String,

    /// Task da qual esta depende ("waiting on")
    pub depends_on: String,

    /// 0 = waiting on, 1 = blocking
    #[serde(rename = "type", deserialize_with = "flex::opt_i64")]
    pub kind: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<FlexId>,
}

/// Task linkada
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedTask {
    pub task_id: String,

    pub link_id: String,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<FlexId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_from_api() {
        let task: Task = serde_json::from_value(json!({
            "id": "9hx",
            "custom_id": null,
            "name": "Updated Task Name",
            "status": {"status": "in progress", "color": "#d3d3d3", "orderindex": 1, "type": "custom"},
            "orderindex": "1.00000000000000000000000000000000",
            "date_created": "1567780450202",
            "date_closed": null,
            "creator": {"id": 183, "username": "John Doe"},
            "assignees": [{"id": 183}],
            "tags": [{"name": "bug", "tag_fg": "#fff", "tag_bg": "#f00"}],
            "parent": null,
            "priority": {"id": "2", "priority": "high"},
            "due_date": "1508369194377",
            "time_estimate": 8640000,
            "list": {"id": "123", "name": "Backlog"},
            "folder": {"id": 456},
            "space": {"id": "789"},
            "url": "https://app.clickup.com/t/9hx"
        }))
        .unwrap();

        assert_eq!(task.id, "9hx");
        assert_eq!(task.status_name(), Some("in progress"));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.date_created, Some(1567780450202));
        assert_eq!(task.date_closed, None);
        assert_eq!(task.assignees[0].id.as_str(), "183");
        assert_eq!(task.tags[0].name, "bug");
        assert_eq!(task.folder.as_ref().map(|f| f.id.as_str()), Some("456"));
        assert!(!task.archived);
    }

    #[test]
    fn test_null_priority_is_none() {
        let task: Task = serde_json::from_value(json!({"id": "1", "priority": null})).unwrap();
        assert_eq!(task.priority, None);
    }
}
