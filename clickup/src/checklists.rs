//! Checklists e itens de checklist

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::transport::Request;
use crate::types::Checklist;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewChecklistItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
}

/// Update de item; booleanos tri-state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateChecklistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    /// Aninha o item sob outro item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Deserialize)]
struct ChecklistResponse {
    checklist: Checklist,
}

pub struct ChecklistManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> ChecklistManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, task_id: &str, name: &str) -> Result<Checklist> {
        const OP: &str = "create checklist";
        let task_id = require_id(task_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/checklist", &[task_id]))
            .with_json(&json!({ "name": name }))
            .op(OP)?;
        let response: ChecklistResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.checklist)
    }

    pub async fn rename(&self, checklist_id: &str, name: &str) -> Result<()> {
        const OP: &str = "rename checklist";
        let checklist_id = require_id(checklist_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::put(self.client.v2("/checklist/{}", &[checklist_id]))
            .with_json(&json!({ "name": name }))
            .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn delete(&self, checklist_id: &str) -> Result<()> {
        const OP: &str = "delete checklist";
        let checklist_id = require_id(checklist_id).op(OP)?;

        let req = Request::delete(self.client.v2("/checklist/{}", &[checklist_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn add_item(&self, checklist_id: &str, item: &NewChecklistItem) -> Result<Checklist> {
        const OP: &str = "add checklist item";
        let checklist_id = require_id(checklist_id).op(OP)?;
        require_name(&item.name).op(OP)?;

        let req = Request::post(self.client.v2("/checklist/{}/checklist_item", &[checklist_id]))
            .with_json(item)
            .op(OP)?;
        let response: ChecklistResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.checklist)
    }

    pub async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        update: &UpdateChecklistItem,
    ) -> Result<Checklist> {
        const OP: &str = "update checklist item";
        let checklist_id = require_id(checklist_id).op(OP)?;
        let item_id = require_id(item_id).op(OP)?;

        let req = Request::put(
            self.client
                .v2("/checklist/{}/checklist_item/{}", &[checklist_id, item_id]),
        )
        .with_json(update)
        .op(OP)?;
        let response: ChecklistResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.checklist)
    }

    pub async fn delete_item(&self, checklist_id: &str, item_id: &str) -> Result<()> {
        const OP: &str = "delete checklist item";
        let checklist_id = require_id(checklist_id).op(OP)?;
        let item_id = require_id(item_id).op(OP)?;

        let req = Request::delete(
            self.client
                .v2("/checklist/{}/checklist_item/{}", &[checklist_id, item_id]),
        );
        self.client.execute_discard(req).await.op(OP)
    }
}
