//! Folders

use serde::Deserialize;
use serde_json::json;

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::Folder;

pub struct FolderManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> FolderManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, space_id: &str, archived: bool) -> Result<Vec<Folder>> {
        const OP: &str = "list folders";
        let space_id = require_id(space_id).op(OP)?;

        #[derive(Deserialize)]
        struct FoldersResponse {
            folders: Vec<Folder>,
        }

        let req = Request::get(self.client.v2("/space/{}/folder", &[space_id]))
            .query(Query::new().bool("archived", archived));
        let response: FoldersResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.folders)
    }

    /// Folder com as listas embutidas
    pub async fn get(&self, folder_id: &str) -> Result<Folder> {
        const OP: &str = "get folder";
        let folder_id = require_id(folder_id).op(OP)?;

        let req = Request::get(self.client.v2("/folder/{}", &[folder_id]));
        self.client.execute(req).await.op(OP)
    }

    pub async fn create(&self, space_id: &str, name: &str) -> Result<Folder> {
        const OP: &str = "create folder";
        let space_id = require_id(space_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::post(self.client.v2("/space/{}/folder", &[space_id]))
            .with_json(&json!({ "name": name }))
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn rename(&self, folder_id: &str, name: &str) -> Result<Folder> {
        const OP: &str = "rename folder";
        let folder_id = require_id(folder_id).op(OP)?;
        require_name(name).op(OP)?;

        let req = Request::put(self.client.v2("/folder/{}", &[folder_id]))
            .with_json(&json!({ "name": name }))
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn delete(&self, folder_id: &str) -> Result<()> {
        const OP: &str = "delete folder";
        let folder_id = require_id(folder_id).op(OP)?;

        let req = Request::delete(self.client.v2("/folder/{}", &[folder_id]));
        self.client.execute_discard(req).await.op(OP)
    }
}
