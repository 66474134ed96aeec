//! Time tracking
//!
//! Um timer rodando tem `duration` negativa (= -start). `start`, `end` e
//! `duration` chegam como string ou número, em milissegundos.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, User};
use crate::flex::{self, FlexId};

/// Task resumida embutida na time entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntryTask {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    pub id: FlexId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TimeEntryTask>,

    /// Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<FlexId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    pub billable: bool,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    pub description: String,

    pub tags: Vec<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub at: Option<i64>,
}

fn millis_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

impl TimeEntry {
    /// Timer em andamento (duração negativa)
    pub fn is_running(&self) -> bool {
        self.duration.is_some_and(|d| d < 0)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start.and_then(millis_to_datetime)
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.end.and_then(millis_to_datetime)
    }

    /// Tempo decorrido: `now - start` se rodando, senão a duração registrada
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        if self.is_running() {
            let started = self.started_at()?;
            Some((now - started).max(Duration::zero()))
        } else {
            self.duration.map(Duration::milliseconds)
        }
    }
}

/// Formata uma duração como `HH:MM:SS`
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
