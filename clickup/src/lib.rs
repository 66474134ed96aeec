//! Cliente tipado da API ClickUp (v2 + v3)
//!
//! Camadas, de baixo para cima:
//!
//! - [`query`]: encoder de query string com a convenção `key[]=...`
//! - [`paths`]: paths versionados; v3 exige workspace
//! - [`transport`]: assina, envia, decodifica ou devolve [`ApiError`]
//! - façades por recurso ([`tasks`], [`lists`], [`time_entries`], ...)
//!
//! Todo erro de façade carrega a tag da operação (`"get task: ..."`) e o
//! tipo original continua acessível via [`ClickUpError::kind`].
//!
//! # Exemplo Básico
//!
//! ```rust,no_run
//! use clickup::{ClickUpClient, tasks::ListTasksOptions};
//!
//! # async fn example() -> clickup::Result<()> {
//! // IMPORTANTE: Ler de variáveis de ambiente (NUNCA hardcode!)
//! let token = std::env::var("CLICKUP_API_TOKEN").unwrap_or_default();
//!
//! let client = ClickUpClient::builder(token).workspace_id("9001").build()?;
//!
//! let options = ListTasksOptions::default().status("in progress");
//! for task in client.tasks().list("list-1", &options).await? {
//!     println!("{} {}", task.id, task.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod checklists;
pub mod client;
pub mod comments;
pub mod docs;
pub mod error;
pub mod fields;
pub mod flex;
pub mod folders;
pub mod lists;
pub mod paths;
pub mod query;
pub mod spaces;
pub mod tags;
pub mod tasks;
pub mod time_entries;
pub mod transport;
pub mod types;
pub mod webhooks;
pub mod workspaces;

pub use client::{ClickUpClient, ClickUpClientBuilder, DEFAULT_BASE_URL};
pub use error::{ApiError, ClickUpError, ErrorKind, Result, ResultExt};
pub use flex::FlexId;
pub use query::Query;
pub use transport::Request;

pub use types::{
    AssigneesDelta, Comment, CustomField, CustomFieldValue, Folder, List, Priority, Space, Status,
    Task, TimeEntry, User, Workspace,
};

/// Token de cancelamento usado por [`ClickUpClient::with_cancellation`]
pub use tokio_util::sync::CancellationToken;
