//! Time tracking (envelope `{"data": ...}`)

use serde::{Deserialize, Serialize};

use crate::client::{require_id, ClickUpClient};
use crate::error::{ClickUpError, Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::TimeEntry;

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

/// Filtros de listagem; zero / vazio ≡ sem filtro
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub task_id: Option<String>,
    /// Início do intervalo (ms)
    pub start_date: i64,
    /// Fim do intervalo (ms)
    pub end_date: i64,
    /// User ids separados por vírgula
    pub assignee: Option<String>,
    pub include_task_tags: bool,
}

impl TimeEntryFilter {
    pub fn for_task(task_id: impl Into<String>) -> Self {
        Self {
            task_id: Some(task_id.into()),
            ..Default::default()
        }
    }

    fn to_query(&self) -> Query {
        Query::new()
            .opt_str("task_id", self.task_id.as_deref())
            .int("start_date", self.start_date)
            .int("end_date", self.end_date)
            .opt_str("assignee", self.assignee.as_deref())
            .bool("include_task_tags", self.include_task_tags)
    }
}

/// Entrada manual de tempo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTimeEntryRequest {
    /// Início (ms); obrigatório
    pub start: i64,

    /// Duração (ms)
    pub duration: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
}

/// Inicia um timer; todos os campos são opcionais
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartTimerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

pub struct TimeEntryManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> TimeEntryManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, team_id: &str, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>> {
        const OP: &str = "list time entries";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::get(self.client.v2("/team/{}/time_entries", &[team_id]))
            .query(filter.to_query());
        let response: Data<Vec<TimeEntry>> = self.client.execute(req).await.op(OP)?;
        Ok(response.data)
    }

    pub async fn get(&self, team_id: &str, timer_id: &str) -> Result<TimeEntry> {
        const OP: &str = "get time entry";
        let team_id = require_id(team_id).op(OP)?;
        let timer_id = require_id(timer_id).op(OP)?;

        let req = Request::get(
            self.client
                .v2("/team/{}/time_entries/{}", &[team_id, timer_id]),
        );
        let response: Data<TimeEntry> = self.client.execute(req).await.op(OP)?;
        Ok(response.data)
    }

    /// Timer rodando do usuário autenticado; `None` quando não há
    pub async fn current(&self, team_id: &str) -> Result<Option<TimeEntry>> {
        const OP: &str = "get current time entry";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::get(self.client.v2("/team/{}/time_entries/current", &[team_id]));
        let response: Data<Option<TimeEntry>> = self.client.execute(req).await.op(OP)?;
        Ok(response.data.filter(|entry| !entry.id.is_empty()))
    }

    pub async fn create(&self, team_id: &str, request: &CreateTimeEntryRequest) -> Result<TimeEntry> {
        const OP: &str = "create time entry";
        let team_id = require_id(team_id).op(OP)?;
        if request.start == 0 {
            return Err(ClickUpError::FieldRequired("start")).op(OP);
        }

        let req = Request::post(self.client.v2("/team/{}/time_entries", &[team_id]))
            .with_json(request)
            .op(OP)?;
        let response: Data<TimeEntry> = self.client.execute(req).await.op(OP)?;
        Ok(response.data)
    }

    pub async fn start(&self, team_id: &str, request: &StartTimerRequest) -> Result<TimeEntry> {
        const OP: &str = "start timer";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::post(self.client.v2("/team/{}/time_entries/start", &[team_id]))
            .with_json(request)
            .op(OP)?;
        let response: Data<TimeEntry> = self.client.execute(req).await.op(OP)?;
        Ok(response.data)
    }

    pub async fn stop(&self, team_id: &str) -> Result<TimeEntry> {
        const OP: &str = "stop timer";
        let team_id = require_id(team_id).op(OP)?;

        let req = Request::post(self.client.v2("/team/{}/time_entries/stop", &[team_id]));
        let response: Data<TimeEntry> = self.client.execute(req).await.op(OP)?;
        Ok(response.data)
    }

    pub async fn update(
        &self,
        team_id: &str,
        timer_id: &str,
        request: &UpdateTimeEntryRequest,
    ) -> Result<()> {
        const OP: &str = "update time entry";
        let team_id = require_id(team_id).op(OP)?;
        let timer_id = require_id(timer_id).op(OP)?;

        let req = Request::put(
            self.client
                .v2("/team/{}/time_entries/{}", &[team_id, timer_id]),
        )
        .with_json(request)
        .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn delete(&self, team_id: &str, timer_id: &str) -> Result<()> {
        const OP: &str = "delete time entry";
        let team_id = require_id(team_id).op(OP)?;
        let timer_id = require_id(timer_id).op(OP)?;

        let req = Request::delete(
            self.client
                .v2("/team/{}/time_entries/{}", &[team_id, timer_id]),
        );
        self.client.execute_discard(req).await.op(OP)
    }
}
