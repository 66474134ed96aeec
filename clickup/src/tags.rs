//! Tags de space e tasks

use serde::Deserialize;
use serde_json::json;

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::transport::Request;
use crate::types::Tag;

pub struct TagManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> TagManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, space_id: &str) -> Result<Vec<Tag>> {
        const OP: &str = "list tags";
        let space_id = require_id(space_id).op(OP)?;

        #[derive(Deserialize)]
        struct TagsResponse {
            tags: Vec<Tag>,
        }

        let req = Request::get(self.client.v2("/space/{}/tag", &[space_id]));
        let response: TagsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.tags)
    }

    pub async fn create(&self, space_id: &str, tag: &Tag) -> Result<()> {
        const OP: &str = "create tag";
        let space_id = require_id(space_id).op(OP)?;
        require_name(&tag.name).op(OP)?;

        let req = Request::post(self.client.v2("/space/{}/tag", &[space_id]))
            .with_json(&json!({ "tag": tag }))
            .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn delete(&self, space_id: &str, name: &str) -> Result<()> {
        const OP: &str = "delete tag";
        let space_id = require_id(space_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::delete(self.client.v2("/space/{}/tag/{}", &[space_id, name]));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn add_to_task(&self, task_id: &str, name: &str) -> Result<()> {
        const OP: &str = "add tag to task";
        let task_id = require_id(task_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/tag/{}", &[task_id, name]));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn remove_from_task(&self, task_id: &str, name: &str) -> Result<()> {
        const OP: &str = "remove tag from task";
        let task_id = require_id(task_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::delete(self.client.v2("/task/{}/tag/{}", &[task_id, name]));
        self.client.execute_discard(req).await.op(OP)
    }
}
