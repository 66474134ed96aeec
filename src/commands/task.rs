use clickup::tasks::{CreateTaskRequest, GetTaskOptions, ListTasksOptions, UpdateTaskRequest};
use clickup::{AssigneesDelta, Priority, Task};

use crate::cli::{TaskCommand, TaskCreateArgs, TaskListArgs, TaskUpdateArgs};
use crate::output::{self, Tabular};
use crate::utils::{AppError, AppResult};

use super::Context;

impl Tabular for Task {
    fn headers() -> &'static [&'static str] {
        &["ID", "STATUS", "PRIORITY", "DUE", "ASSIGNEES", "NAME"]
    }

    fn row(&self) -> Vec<String> {
        let assignees = self
            .assignees
            .iter()
            .map(|u| u.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            self.id.clone(),
            output::or_dash(self.status_name()),
            self.priority
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
            output::format_millis(self.due_date),
            output::or_dash(Some(&assignees)),
            self.name.clone(),
        ]
    }
}

fn parse_priority(value: Option<&str>) -> AppResult<Option<Priority>> {
    match value {
        None => Ok(None),
        Some(raw) => Priority::parse(raw).map(Some).ok_or_else(|| {
            AppError::ValidationError(format!(
                "invalid priority {:?} (use urgent, high, normal, low or 1-4)",
                raw
            ))
        }),
    }
}

pub fn list_options(args: &TaskListArgs) -> ListTasksOptions {
    ListTasksOptions {
        include_closed: args.include_closed,
        statuses: args.statuses.clone(),
        assignees: args.assignees.clone(),
        tags: args.tags.clone(),
        page: args.page,
        ..Default::default()
    }
}

pub fn create_request(args: &TaskCreateArgs) -> AppResult<CreateTaskRequest> {
    Ok(CreateTaskRequest {
        description: args.description.clone(),
        status: args.status.clone(),
        priority: parse_priority(args.priority.as_deref())?,
        assignees: args.assignees.clone(),
        tags: args.tags.clone(),
        parent: args.parent.clone(),
        ..CreateTaskRequest::new(args.name.clone())
    })
}

pub fn update_request(args: &TaskUpdateArgs) -> AppResult<UpdateTaskRequest> {
    let mut delta = AssigneesDelta::new();
    for id in &args.add_assignees {
        delta = delta.add(*id);
    }
    for id in &args.remove_assignees {
        delta = delta.remove(*id);
    }

    let request = UpdateTaskRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        status: args.status.clone(),
        priority: parse_priority(args.priority.as_deref())?,
        archived: args.archived,
        assignees: (!delta.is_empty()).then_some(delta),
        ..Default::default()
    };

    if request.is_empty() {
        return Err(AppError::ValidationError(
            "nothing to update: pass at least one field flag".to_string(),
        ));
    }
    Ok(request)
}

pub async fn run(ctx: &Context, cmd: TaskCommand) -> AppResult<()> {
    let tasks = ctx.client.tasks();

    match cmd {
        TaskCommand::List(args) => {
            let found = tasks.list(&args.list_id, &list_options(&args)).await?;
            output::print_list(&found, ctx.format)
        }
        TaskCommand::Get { task_id, subtasks } => {
            let options = GetTaskOptions {
                include_subtasks: subtasks,
                ..Default::default()
            };
            let task = tasks.get(&task_id, &options).await?;
            output::print_one(&task, ctx.format)
        }
        TaskCommand::Create(args) => {
            let request = create_request(&args)?;
            let task = tasks.create(&args.list_id, &request).await?;
            output::print_one(&task, ctx.format)
        }
        TaskCommand::Update(args) => {
            let request = update_request(&args)?;
            let task = tasks.update(&args.task_id, &request).await?;
            output::print_one(&task, ctx.format)
        }
        TaskCommand::Delete { task_id } => {
            tasks.delete(&task_id).await?;
            output::print_done(&format!("Task {} deleted", task_id), ctx.format)
        }
        TaskCommand::Merge {
            target_id,
            source_ids,
        } => {
            let merged = tasks.merge(&target_id, &source_ids).await?;
            output::print_one(&merged, ctx.format)
        }
        TaskCommand::Move { task_id, list_id } => {
            tasks.move_to_list(&task_id, &list_id).await?;
            output::print_done(
                &format!("Task {} moved to list {}", task_id, list_id),
                ctx.format,
            )
        }
    }
}
