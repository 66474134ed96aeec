//! Listas (dentro de folders ou direto no space)

use serde::{Deserialize, Serialize};

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::{List, Member, User};

/// Dados para criar uma nova lista
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateListRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Timestamp em milissegundos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// User id do responsável
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    /// Cor da lista ("status" na API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateListRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Tri-state: `Some(true)` remove a cor da lista, `None` não mexe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unset_status: Option<bool>,
}

#[derive(Deserialize)]
struct ListsResponse {
    lists: Vec<List>,
}

pub struct ListManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> ListManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Listas de um folder
    pub async fn list(&self, folder_id: &str, archived: bool) -> Result<Vec<List>> {
        const OP: &str = "list lists";
        let folder_id = require_id(folder_id).op(OP)?;

        let req = Request::get(self.client.v2("/folder/{}/list", &[folder_id]))
            .query(Query::new().bool("archived", archived));
        let response: ListsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.lists)
    }

    /// Listas soltas no space (sem folder)
    pub async fn list_folderless(&self, space_id: &str, archived: bool) -> Result<Vec<List>> {
        const OP: &str = "list folderless lists";
        let space_id = require_id(space_id).op(OP)?;

        let req = Request::get(self.client.v2("/space/{}/list", &[space_id]))
            .query(Query::new().bool("archived", archived));
        let response: ListsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.lists)
    }

    pub async fn get(&self, list_id: &str) -> Result<List> {
        const OP: &str = "get list";
        let list_id = require_id(list_id).op(OP)?;

        let req = Request::get(self.client.v2("/list/{}", &[list_id]));
        self.client.execute(req).await.op(OP)
    }

    /// Cria uma nova lista em uma pasta
    pub async fn create(&self, folder_id: &str, request: &CreateListRequest) -> Result<List> {
        const OP: &str = "create list";
        let folder_id = require_id(folder_id).op(OP)?;
        require_name(&request.name).op(OP)?;

        let req = Request::post(self.client.v2("/folder/{}/list", &[folder_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn create_folderless(
        &self,
        space_id: &str,
        request: &CreateListRequest,
    ) -> Result<List> {
        const OP: &str = "create folderless list";
        let space_id = require_id(space_id).op(OP)?;
        require_name(&request.name).op(OP)?;

        let req = Request::post(self.client.v2("/space/{}/list", &[space_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn update(&self, list_id: &str, request: &UpdateListRequest) -> Result<List> {
        const OP: &str = "update list";
        let list_id = require_id(list_id).op(OP)?;
        if let Some(name) = &request.name {
            require_name(name).op(OP)?;
        }

        let req = Request::put(self.client.v2("/list/{}", &[list_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn delete(&self, list_id: &str) -> Result<()> {
        const OP: &str = "delete list";
        let list_id = require_id(list_id).op(OP)?;

        let req = Request::delete(self.client.v2("/list/{}", &[list_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    /// Adiciona a task a uma lista extra (tasks in multiple lists)
    pub async fn add_task(&self, list_id: &str, task_id: &str) -> Result<()> {
        const OP: &str = "add task to list";
        let list_id = require_id(list_id).op(OP)?;
        let task_id = require_id(task_id).op(OP)?;

        let req = Request::post(self.client.v2("/list/{}/task/{}", &[list_id, task_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn remove_task(&self, list_id: &str, task_id: &str) -> Result<()> {
        const OP: &str = "remove task from list";
        let list_id = require_id(list_id).op(OP)?;
        let task_id = require_id(task_id).op(OP)?;

        let req = Request::delete(self.client.v2("/list/{}/task/{}", &[list_id, task_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    /// Membros com acesso à lista
    pub async fn members(&self, list_id: &str) -> Result<Vec<User>> {
        const OP: &str = "list list members";
        let list_id = require_id(list_id).op(OP)?;

        #[derive(Deserialize)]
        struct MembersResponse {
            members: Vec<Member>,
        }

        let req = Request::get(self.client.v2("/list/{}/member", &[list_id]));
        let response: MembersResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.members.into_iter().map(|m| m.user().clone()).collect())
    }
}
