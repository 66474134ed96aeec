use clickup::types::WorkspacePlan;
use clickup::Workspace;

use crate::cli::WorkspaceCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for Workspace {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "MEMBERS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.members.len().to_string(),
        ]
    }
}

impl Tabular for WorkspacePlan {
    fn headers() -> &'static [&'static str] {
        &["PLAN ID", "PLAN"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.plan_id.to_string(), self.plan_name.clone()]
    }
}

pub async fn run(ctx: &Context, cmd: WorkspaceCommand) -> AppResult<()> {
    match cmd {
        WorkspaceCommand::List => {
            let workspaces = ctx.client.workspaces().list().await?;
            output::print_list(&workspaces, ctx.format)
        }
        WorkspaceCommand::Plan { team_id } => {
            let plan = ctx.client.workspaces().plan(&team_id).await?;
            output::print_one(&plan, ctx.format)
        }
    }
}
