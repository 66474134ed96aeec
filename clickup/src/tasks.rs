//! Task operations
//!
//! Listagem com filtros (`statuses[]`, `assignees[]`, ...), CRUD, merge,
//! dependências, links e move entre listas (v3).

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{ClickUpError, Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::{AssigneesDelta, Member, Priority, Task, User};

/// Filtros de listagem/busca de tasks
///
/// Zero / vazio / `false` ≡ sem filtro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasksOptions {
    /// Inclui tasks fechadas (padrão: `true`)
    pub include_closed: bool,
    pub archived: bool,
    pub subtasks: bool,
    pub statuses: Vec<String>,
    pub assignees: Vec<String>,
    pub tags: Vec<String>,
    /// Só na busca por workspace
    pub list_ids: Vec<String>,
    /// Só na busca por workspace
    pub space_ids: Vec<String>,
    pub page: i64,
    /// "id", "created", "updated" ou "due_date"
    pub order_by: Option<String>,
    pub reverse: bool,
    pub due_date_gt: i64,
    pub due_date_lt: i64,
    pub date_updated_gt: i64,
}

impl Default for ListTasksOptions {
    fn default() -> Self {
        Self {
            include_closed: true,
            archived: false,
            subtasks: false,
            statuses: Vec::new(),
            assignees: Vec::new(),
            tags: Vec::new(),
            list_ids: Vec::new(),
            space_ids: Vec::new(),
            page: 0,
            order_by: None,
            reverse: false,
            due_date_gt: 0,
            due_date_lt: 0,
            date_updated_gt: 0,
        }
    }
}

impl ListTasksOptions {
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignees.push(assignee.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn to_query(&self) -> Query {
        Query::new()
            .bool("include_closed", self.include_closed)
            .bool("archived", self.archived)
            .bool("subtasks", self.subtasks)
            .list("statuses", &self.statuses)
            .list("assignees", &self.assignees)
            .list("tags", &self.tags)
            .list("list_ids", &self.list_ids)
            .list("space_ids", &self.space_ids)
            .int("page", self.page)
            .opt_str("order_by", self.order_by.as_deref())
            .bool("reverse", self.reverse)
            .int("due_date_gt", self.due_date_gt)
            .int("due_date_lt", self.due_date_lt)
            .int("date_updated_gt", self.date_updated_gt)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTaskOptions {
    pub include_subtasks: bool,
    /// `task_id` é um custom id; exige `team_id`
    pub custom_task_ids: bool,
    pub team_id: Option<String>,
}

impl GetTaskOptions {
    fn to_query(&self) -> Query {
        Query::new()
            .bool("include_subtasks", self.include_subtasks)
            .bool("custom_task_ids", self.custom_task_ids)
            .opt_str("team_id", self.team_id.as_deref())
    }
}

/// Valor de custom field na criação da task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFieldSetting {
    pub id: String,
    pub value: serde_json::Value,
}

/// Payload de criação de task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Timestamp em milissegundos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    /// Estimativa em milissegundos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,

    /// Cria como subtask
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_to: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldSetting>,
}

impl CreateTaskRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Payload de update (PUT); campos `None` não são enviados
///
/// Booleanos são tri-state: `Some(false)` é enviado, `None` não.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<AssigneesDelta>,
}

impl UpdateTaskRequest {
    /// `true` quando nenhum campo seria enviado
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Deserialize)]
struct TasksResponse {
    tasks: Vec<Task>,
}

/// Gerenciador de tasks
pub struct TaskManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> TaskManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Tasks de uma lista (uma página)
    pub async fn list(&self, list_id: &str, options: &ListTasksOptions) -> Result<Vec<Task>> {
        const OP: &str = "list tasks";
        let list_id = require_id(list_id).op(OP)?;

        let req = Request::get(self.client.v2("/list/{}/task", &[list_id])).query(options.to_query());
        let response: TasksResponse = self.client.execute(req).await.op(OP)?;

        tracing::debug!("{} tasks na lista {}", response.tasks.len(), list_id);
        Ok(response.tasks)
    }

    /// Busca tasks no workspace inteiro (filtered team tasks)
    pub async fn search(&self, team_id: &str, options: &ListTasksOptions) -> Result<Vec<Task>> {
        const OP: &str = "search tasks";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::get(self.client.v2("/team/{}/task", &[team_id])).query(options.to_query());
        let response: TasksResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.tasks)
    }

    pub async fn get(&self, task_id: &str, options: &GetTaskOptions) -> Result<Task> {
        const OP: &str = "get task";
        let task_id = require_id(task_id).op(OP)?;

        let req = Request::get(self.client.v2("/task/{}", &[task_id])).query(options.to_query());
        self.client.execute(req).await.op(OP)
    }

    pub async fn create(&self, list_id: &str, request: &CreateTaskRequest) -> Result<Task> {
        const OP: &str = "create task";
        let list_id = require_id(list_id).op(OP)?;
        require_name(&request.name).op(OP)?;

        let req = Request::post(self.client.v2("/list/{}/task", &[list_id]))
            .with_json(request)
            .op(OP)?;
        let task: Task = self.client.execute(req).await.op(OP)?;

        tracing::info!("Task criada: {} ({})", task.name, task.id);
        Ok(task)
    }

    pub async fn update(&self, task_id: &str, request: &UpdateTaskRequest) -> Result<Task> {
        const OP: &str = "update task";
        let task_id = require_id(task_id).op(OP)?;
        if let Some(name) = &request.name {
            require_name(name).op(OP)?;
        }

        let req = Request::put(self.client.v2("/task/{}", &[task_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn delete(&self, task_id: &str) -> Result<()> {
        const OP: &str = "delete task";
        let task_id = require_id(task_id).op(OP)?;

        let req = Request::delete(self.client.v2("/task/{}", &[task_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    /// Funde as tasks de origem na task alvo
    pub async fn merge(&self, target_id: &str, source_ids: &[String]) -> Result<Task> {
        const OP: &str = "merge tasks";
        let target_id = require_id(target_id).op(OP)?;
        if source_ids.is_empty() {
            return Err(ClickUpError::SourceTasksRequired).op(OP);
        }
        let sources = source_ids
            .iter()
            .map(|id| require_id(id).map(str::to_string))
            .collect::<Result<Vec<_>>>()
            .op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/merge", &[target_id]))
            .with_json(&json!({ "merged_task_ids": sources }))
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    /// Muda a lista "home" da task (endpoint v3)
    pub async fn move_to_list(&self, task_id: &str, list_id: &str) -> Result<()> {
        const OP: &str = "move task";
        let task_id = require_id(task_id).op(OP)?;
        let list_id = require_id(list_id).op(OP)?;

        let path = self
            .client
            .v3("/tasks/{}/home_list/{}", &[task_id, list_id])
            .op(OP)?;
        self.client.execute_discard(Request::put(path)).await.op(OP)
    }

    /// `task_id` passa a esperar por `depends_on`
    pub async fn add_dependency(&self, task_id: &str, depends_on: &str) -> Result<()> {
        const OP: &str = "add task dependency";
        let task_id = require_id(task_id).op(OP)?;
        let depends_on = require_id(depends_on).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/dependency", &[task_id]))
            .with_json(&json!({ "depends_on": depends_on }))
            .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn remove_dependency(&self, task_id: &str, depends_on: &str) -> Result<()> {
        const OP: &str = "remove task dependency";
        let task_id = require_id(task_id).op(OP)?;
        let depends_on = require_id(depends_on).op(OP)?;

        let req = Request::delete(self.client.v2("/task/{}/dependency", &[task_id]))
            .query(Query::new().str("depends_on", depends_on));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn add_link(&self, task_id: &str, links_to: &str) -> Result<()> {
        const OP: &str = "link tasks";
        let task_id = require_id(task_id).op(OP)?;
        let links_to = require_id(links_to).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/link/{}", &[task_id, links_to]));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn remove_link(&self, task_id: &str, links_to: &str) -> Result<()> {
        const OP: &str = "unlink tasks";
        let task_id = require_id(task_id).op(OP)?;
        let links_to = require_id(links_to).op(OP)?;

        let req = Request::delete(self.client.v2("/task/{}/link/{}", &[task_id, links_to]));
        self.client.execute_discard(req).await.op(OP)
    }

    /// Pessoas com acesso explícito à task
    pub async fn members(&self, task_id: &str) -> Result<Vec<User>> {
        const OP: &str = "list task members";
        let task_id = require_id(task_id).op(OP)?;

        #[derive(Deserialize)]
        struct MembersResponse {
            members: Vec<Member>,
        }

        let req = Request::get(self.client.v2("/task/{}/member", &[task_id]));
        let response: MembersResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.members.into_iter().map(|m| m.user().clone()).collect())
    }
}
