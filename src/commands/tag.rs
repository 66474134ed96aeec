use clickup::types::Tag;

use crate::cli::TagCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for Tag {
    fn headers() -> &'static [&'static str] {
        &["NAME", "FG", "BG"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            output::or_dash(self.tag_fg.as_deref()),
            output::or_dash(self.tag_bg.as_deref()),
        ]
    }
}

pub async fn run(ctx: &Context, cmd: TagCommand) -> AppResult<()> {
    let tags = ctx.client.tags();

    match cmd {
        TagCommand::List { space_id } => {
            let found = tags.list(&space_id).await?;
            output::print_list(&found, ctx.format)
        }
        TagCommand::Add { task_id, tag } => {
            tags.add_to_task(&task_id, &tag).await?;
            output::print_done(&format!("Tag {:?} added to {}", tag, task_id), ctx.format)
        }
        TagCommand::Remove { task_id, tag } => {
            tags.remove_from_task(&task_id, &tag).await?;
            output::print_done(
                &format!("Tag {:?} removed from {}", tag, task_id),
                ctx.format,
            )
        }
    }
}
