use clickup::comments::CreateCommentRequest;
use clickup::types::CommentCreated;
use clickup::Comment;

use crate::cli::CommentCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

/// Comentários longos são cortados na tabela
const TEXT_WIDTH: usize = 60;

fn truncate(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= TEXT_WIDTH {
        single_line
    } else {
        let cut: String = single_line.chars().take(TEXT_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

impl Tabular for Comment {
    fn headers() -> &'static [&'static str] {
        &["ID", "DATE", "AUTHOR", "TEXT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            output::format_millis(self.date),
            output::or_dash(self.user.as_ref().map(|u| u.display_name())),
            truncate(&self.comment_text),
        ]
    }
}

impl Tabular for CommentCreated {
    fn headers() -> &'static [&'static str] {
        &["ID", "DATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), output::format_millis(self.date)]
    }
}

pub async fn run(ctx: &Context, cmd: CommentCommand) -> AppResult<()> {
    let comments = ctx.client.comments();

    match cmd {
        CommentCommand::List { task_id } => {
            let found = comments.list(&task_id).await?;
            output::print_list(&found, ctx.format)
        }
        CommentCommand::Add {
            task_id,
            text,
            notify_all,
        } => {
            let request = CreateCommentRequest {
                notify_all: notify_all.then_some(true),
                ..CreateCommentRequest::new(text)
            };
            let created = comments.add(&task_id, &request).await?;
            output::print_one(&created, ctx.format)
        }
        CommentCommand::Reply {
            comment_id,
            text,
            assignee,
        } => {
            let request = CreateCommentRequest {
                assignee,
                ..CreateCommentRequest::new(text)
            };
            let created = comments.reply(&comment_id, &request).await?;
            output::print_one(&created, ctx.format)
        }
        CommentCommand::Delete { comment_id } => {
            comments.delete(&comment_id).await?;
            output::print_done(&format!("Comment {} deleted", comment_id), ctx.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("a\n  b"), "a b");
        let long = "x".repeat(100);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), TEXT_WIDTH);
        assert!(cut.ends_with('…'));
    }
}
