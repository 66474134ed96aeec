//! Workspaces ("teams" na v2)

use serde::Deserialize;

use crate::client::{require_id, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::transport::Request;
use crate::types::{Workspace, WorkspacePlan, WorkspaceSeats};

pub struct WorkspaceManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> WorkspaceManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Workspaces acessíveis pelo token
    pub async fn list(&self) -> Result<Vec<Workspace>> {
        const OP: &str = "list workspaces";

        #[derive(Deserialize)]
        struct TeamsResponse {
            teams: Vec<Workspace>,
        }

        let req = Request::get(self.client.v2("/team", &[]));
        let response: TeamsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.teams)
    }

    pub async fn seats(&self, team_id: &str) -> Result<WorkspaceSeats> {
        const OP: &str = "get workspace seats";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::get(self.client.v2("/team/{}/seats", &[team_id]));
        self.client.execute(req).await.op(OP)
    }

    pub async fn plan(&self, team_id: &str) -> Result<WorkspacePlan> {
        const OP: &str = "get workspace plan";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::get(self.client.v2("/team/{}/plan", &[team_id]));
        self.client.execute(req).await.op(OP)
    }
}
