//! Execução dos subcomandos
//!
//! Cada grupo recebe o [`Context`] (cliente já autenticado + formato de
//! saída) e traduz flags em chamadas das façades do crate `clickup`.

pub mod auth;
pub mod comment;
pub mod folder;
pub mod list;
pub mod space;
pub mod tag;
pub mod task;
pub mod time;
pub mod workspace;

use clickup::{ClickUpClient, User};

use crate::cli::Command;
use crate::config::OutputFormat;
use crate::output::Tabular;
use crate::utils::{AppError, AppResult};

pub struct Context {
    pub client: ClickUpClient,
    pub format: OutputFormat,
}

/// Grupos que usam o cliente autenticado (tudo menos `auth`)
pub async fn dispatch(ctx: &Context, command: Command) -> AppResult<()> {
    match command {
        Command::Workspace(cmd) => workspace::run(ctx, cmd).await,
        Command::Space(cmd) => space::run(ctx, cmd).await,
        Command::Folder(cmd) => folder::run(ctx, cmd).await,
        Command::List(cmd) => list::run(ctx, cmd).await,
        Command::Task(cmd) => task::run(ctx, cmd).await,
        Command::Comment(cmd) => comment::run(ctx, cmd).await,
        Command::Time(cmd) => time::run(ctx, cmd).await,
        Command::Tag(cmd) => tag::run(ctx, cmd).await,
        Command::Auth(_) => Err(AppError::ValidationError(
            "auth commands run before the client is built".to_string(),
        )),
    }
}

impl Tabular for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "EMAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name().to_string(),
            self.email.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}
