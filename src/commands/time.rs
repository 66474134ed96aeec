use chrono::Utc;
use clickup::time_entries::{StartTimerRequest, TimeEntryFilter};
use clickup::types::time_entry::format_duration;
use clickup::TimeEntry;

use crate::cli::TimeCommand;
use crate::output::{self, Tabular};
use crate::utils::AppResult;

use super::Context;

impl Tabular for TimeEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "TASK", "START", "DURATION", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        let duration = self
            .elapsed(Utc::now())
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string());
        let duration = if self.is_running() {
            format!("{} (running)", duration)
        } else {
            duration
        };

        vec![
            self.id.to_string(),
            output::or_dash(self.task.as_ref().map(|t| t.name.as_str())),
            output::format_millis(self.start),
            duration,
            output::or_dash(Some(&self.description)),
        ]
    }
}

pub async fn run(ctx: &Context, cmd: TimeCommand) -> AppResult<()> {
    let time = ctx.client.time();

    match cmd {
        TimeCommand::List { team_id, task_id } => {
            let filter = match task_id {
                Some(task_id) => TimeEntryFilter::for_task(task_id),
                None => TimeEntryFilter::default(),
            };
            let entries = time.list(&team_id, &filter).await?;
            output::print_list(&entries, ctx.format)
        }
        TimeCommand::Current { team_id } => match time.current(&team_id).await? {
            Some(entry) => output::print_one(&entry, ctx.format),
            None => output::print_done("No timer running", ctx.format),
        },
        TimeCommand::Start {
            team_id,
            task_id,
            description,
        } => {
            let request = StartTimerRequest {
                tid: task_id,
                description,
                ..Default::default()
            };
            let entry = time.start(&team_id, &request).await?;
            output::print_one(&entry, ctx.format)
        }
        TimeCommand::Stop { team_id } => {
            let entry = time.stop(&team_id).await?;
            output::print_one(&entry, ctx.format)
        }
        TimeCommand::Delete { team_id, timer_id } => {
            time.delete(&team_id, &timer_id).await?;
            output::print_done(&format!("Time entry {} deleted", timer_id), ctx.format)
        }
    }
}
