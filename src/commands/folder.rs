use clickup::Folder;

use crate::cli::FolderCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for Folder {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "LISTS", "TASKS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.lists.len().to_string(),
            self.task_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

pub async fn run(ctx: &Context, cmd: FolderCommand) -> AppResult<()> {
    let folders = ctx.client.folders();

    match cmd {
        FolderCommand::List { space_id, archived } => {
            let found = folders.list(&space_id, archived).await?;
            output::print_list(&found, ctx.format)
        }
        FolderCommand::Get { folder_id } => {
            let folder = folders.get(&folder_id).await?;
            output::print_one(&folder, ctx.format)
        }
        FolderCommand::Create { space_id, name } => {
            let folder = folders.create(&space_id, &name).await?;
            output::print_one(&folder, ctx.format)
        }
        FolderCommand::Rename { folder_id, name } => {
            let folder = folders.rename(&folder_id, &name).await?;
            output::print_one(&folder, ctx.format)
        }
        FolderCommand::Delete { folder_id } => {
            folders.delete(&folder_id).await?;
            output::print_done(&format!("Folder {} deleted", folder_id), ctx.format)
        }
    }
}
