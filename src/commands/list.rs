use clickup::lists::CreateListRequest;
use clickup::List;

use crate::cli::ListCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for List {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TASKS", "FOLDER"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.task_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            output::or_dash(self.folder.as_ref().and_then(|f| f.name.as_deref())),
        ]
    }
}

pub async fn run(ctx: &Context, cmd: ListCommand) -> AppResult<()> {
    let lists = ctx.client.lists();

    match cmd {
        ListCommand::List { folder_id, archived } => {
            let found = lists.list(&folder_id, archived).await?;
            output::print_list(&found, ctx.format)
        }
        ListCommand::Folderless { space_id, archived } => {
            let found = lists.list_folderless(&space_id, archived).await?;
            output::print_list(&found, ctx.format)
        }
        ListCommand::Get { list_id } => {
            let list = lists.get(&list_id).await?;
            output::print_one(&list, ctx.format)
        }
        ListCommand::Create {
            folder_id,
            name,
            content,
        } => {
            let request = CreateListRequest {
                content,
                ..CreateListRequest::new(name)
            };
            let list = lists.create(&folder_id, &request).await?;
            output::print_one(&list, ctx.format)
        }
        ListCommand::Delete { list_id } => {
            lists.delete(&list_id).await?;
            output::print_done(&format!("List {} deleted", list_id), ctx.format)
        }
    }
}
