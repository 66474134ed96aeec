//! Definição da linha de comando (clap derive)

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "clickup")]
#[command(author, version, about = "ClickUp from the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    /// API token (senão CLICKUP_API_TOKEN, senão o secret store)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Workspace used by v3 endpoints
    #[arg(long, global = true)]
    pub workspace_id: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Credential management
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Workspaces (teams)
    #[command(subcommand)]
    Workspace(WorkspaceCommand),

    /// Spaces
    #[command(subcommand)]
    Space(SpaceCommand),

    /// Folders
    #[command(subcommand)]
    Folder(FolderCommand),

    /// Lists
    #[command(subcommand)]
    List(ListCommand),

    /// Tasks
    #[command(subcommand)]
    Task(TaskCommand),

    /// Comments
    #[command(subcommand)]
    Comment(CommentCommand),

    /// Time tracking
    #[command(subcommand)]
    Time(TimeCommand),

    /// Tags
    #[command(subcommand)]
    Tag(TagCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Validate a token (--token or prompt) and save it in the secret store
    Login,

    /// Remove the saved token
    Logout,

    /// Show who the current credential belongs to
    Status,

    /// Exchange an OAuth authorization code for an access token
    OauthToken {
        #[arg(long)]
        client_id: String,

        #[arg(long)]
        client_secret: String,

        #[arg(long)]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommand {
    /// List authorized workspaces
    List,

    /// Show the workspace plan
    Plan { team_id: String },
}

#[derive(Debug, Subcommand)]
pub enum SpaceCommand {
    List {
        team_id: String,

        #[arg(long)]
        archived: bool,
    },

    Get { space_id: String },

    Create {
        team_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        multiple_assignees: bool,
    },

    Delete { space_id: String },
}

#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    List {
        space_id: String,

        #[arg(long)]
        archived: bool,
    },

    Get { folder_id: String },

    Create {
        space_id: String,

        #[arg(long)]
        name: String,
    },

    Rename {
        folder_id: String,

        #[arg(long)]
        name: String,
    },

    Delete { folder_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Lists inside a folder
    List {
        folder_id: String,

        #[arg(long)]
        archived: bool,
    },

    /// Lists directly under a space
    Folderless {
        space_id: String,

        #[arg(long)]
        archived: bool,
    },

    Get { list_id: String },

    Create {
        folder_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        content: Option<String>,
    },

    Delete { list_id: String },
}

#[derive(Debug, Args)]
pub struct TaskListArgs {
    pub list_id: String,

    /// Status filter (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Assignee filter (repeatable)
    #[arg(long = "assignee")]
    pub assignees: Vec<String>,

    /// Tag filter (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub include_closed: bool,

    #[arg(long, default_value_t = 0)]
    pub page: i64,
}

#[derive(Debug, Args)]
pub struct TaskCreateArgs {
    pub list_id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// urgent, high, normal, low or 1-4
    #[arg(long)]
    pub priority: Option<String>,

    /// Assignee user id (repeatable)
    #[arg(long = "assignee")]
    pub assignees: Vec<i64>,

    /// Tag name (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Parent task id (creates a subtask)
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Debug, Args)]
pub struct TaskUpdateArgs {
    pub task_id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long = "add-assignee")]
    pub add_assignees: Vec<i64>,

    #[arg(long = "remove-assignee")]
    pub remove_assignees: Vec<i64>,

    #[arg(long, action = clap::ArgAction::Set)]
    pub archived: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    List(TaskListArgs),

    Get {
        task_id: String,

        #[arg(long)]
        subtasks: bool,
    },

    Create(TaskCreateArgs),

    Update(TaskUpdateArgs),

    Delete { task_id: String },

    /// Merge source tasks into the target
    Merge {
        target_id: String,

        #[arg(required = true)]
        source_ids: Vec<String>,
    },

    /// Change the home list of a task (needs --workspace-id)
    Move { task_id: String, list_id: String },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    List { task_id: String },

    Add {
        task_id: String,

        #[arg(long)]
        text: String,

        #[arg(long)]
        notify_all: bool,
    },

    Reply {
        comment_id: String,

        #[arg(long)]
        text: String,

        #[arg(long)]
        assignee: Option<i64>,
    },

    Delete { comment_id: String },
}

#[derive(Debug, Subcommand)]
pub enum TimeCommand {
    List {
        team_id: String,

        #[arg(long = "task")]
        task_id: Option<String>,
    },

    /// Show the running timer
    Current { team_id: String },

    Start {
        team_id: String,

        #[arg(long = "task")]
        task_id: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    Stop { team_id: String },

    Delete { team_id: String, timer_id: String },
}

#[derive(Debug, Subcommand)]
pub enum TagCommand {
    List { space_id: String },

    Add { task_id: String, tag: String },

    Remove { task_id: String, tag: String },
}
