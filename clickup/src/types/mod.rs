//! Tipos do ClickUp API
//!
//! ## ⚠️ Notas Importantes
//!
//! - **IDs**: comentários, time entries e usuários podem trazer o id como
//!   número ou string; ver [`crate::flex::FlexId`]
//! - **Timestamps**: sempre em milissegundos (i64), nunca segundos
//! - **Priority**: valores limitados a 1-4
//! - **Status**: não são globais, cada lista tem seus próprios status

pub mod checklist;
pub mod comment;
pub mod custom_field;
pub mod doc;
pub mod hierarchy;
pub mod priority;
pub mod status;
pub mod tag;
pub mod task;
pub mod time_entry;
pub mod user;
pub mod workspace;

pub use checklist::{Checklist, ChecklistItem};
pub use comment::{Comment, CommentCreated};
pub use custom_field::{CustomField, CustomFieldValue, DropdownOption, TypeConfig};
pub use doc::{Doc, DocPage, DocParent};
pub use hierarchy::{Folder, List, ListStatus, Space};
pub use priority::Priority;
pub use status::Status;
pub use tag::Tag;
pub use task::{LinkedTask, Location, Task, TaskDependency};
pub use time_entry::{TimeEntry, TimeEntryTask};
pub use user::{AssigneesDelta, Member, User};
pub use workspace::{SeatUsage, Workspace, WorkspacePlan, WorkspaceSeats};
