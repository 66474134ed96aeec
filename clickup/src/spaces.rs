//! Spaces

use serde::{Deserialize, Serialize};

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::Space;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSpaceRequest {
    pub name: String,

    pub multiple_assignees: bool,

    /// Features do space (`{"due_dates": {"enabled": true}}`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSpaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,
}

pub struct SpaceManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> SpaceManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, team_id: &str, archived: bool) -> Result<Vec<Space>> {
        const OP: &str = "list spaces";
        let team_id = require_id(team_id).op(OP)?;

        #[derive(Deserialize)]
        struct SpacesResponse {
            spaces: Vec<Space>,
        }

        let req = Request::get(self.client.v2("/team/{}/space", &[team_id]))
            .query(Query::new().bool("archived", archived));
        let response: SpacesResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.spaces)
    }

    pub async fn get(&self, space_id: &str) -> Result<Space> {
        const OP: &str = "get space";
        let space_id = require_id(space_id).op(OP)?;

        let req = Request::get(self.client.v2("/space/{}", &[space_id]));
        self.client.execute(req).await.op(OP)
    }

    pub async fn create(&self, team_id: &str, request: &CreateSpaceRequest) -> Result<Space> {
        const OP: &str = "create space";
        let team_id = require_id(team_id).op(OP)?;
        require_name(&request.name).op(OP)?;

        let req = Request::post(self.client.v2("/team/{}/space", &[team_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn update(&self, space_id: &str, request: &UpdateSpaceRequest) -> Result<Space> {
        const OP: &str = "update space";
        let space_id = require_id(space_id).op(OP)?;
        if let Some(name) = &request.name {
            require_name(name).op(OP)?;
        }

        let req = Request::put(self.client.v2("/space/{}", &[space_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn delete(&self, space_id: &str) -> Result<()> {
        const OP: &str = "delete space";
        let space_id = require_id(space_id).op(OP)?;

        let req = Request::delete(self.client.v2("/space/{}", &[space_id]));
        self.client.execute_discard(req).await.op(OP)
    }
}
