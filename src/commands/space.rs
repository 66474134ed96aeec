use clickup::spaces::CreateSpaceRequest;
use clickup::Space;

use crate::cli::SpaceCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for Space {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PRIVATE", "STATUSES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.private.to_string(),
            self.statuses
                .iter()
                .map(|s| s.status.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }
}

pub async fn run(ctx: &Context, cmd: SpaceCommand) -> AppResult<()> {
    let spaces = ctx.client.spaces();

    match cmd {
        SpaceCommand::List { team_id, archived } => {
            let found = spaces.list(&team_id, archived).await?;
            output::print_list(&found, ctx.format)
        }
        SpaceCommand::Get { space_id } => {
            let space = spaces.get(&space_id).await?;
            output::print_one(&space, ctx.format)
        }
        SpaceCommand::Create {
            team_id,
            name,
            multiple_assignees,
        } => {
            let request = CreateSpaceRequest {
                name,
                multiple_assignees,
                ..Default::default()
            };
            let space = spaces.create(&team_id, &request).await?;
            output::print_one(&space, ctx.format)
        }
        SpaceCommand::Delete { space_id } => {
            spaces.delete(&space_id).await?;
            output::print_done(&format!("Space {} deleted", space_id), ctx.format)
        }
    }
}
