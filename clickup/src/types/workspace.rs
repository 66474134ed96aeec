//! Workspaces (chamados de "team" na API v2)

use serde::{Deserialize, Serialize};

use super::Member;
use crate::flex::{self, FlexId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    pub members: Vec<Member>,
}

/// Plano contratado do workspace
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspacePlan {
    pub plan_name: String,
    pub plan_id: FlexId,
}

/// Ocupação de assentos
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSeats {
    pub members: SeatUsage,
    pub guests: SeatUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatUsage {
    #[serde(deserialize_with = "flex::opt_i64")]
    pub filled_members_seats: Option<i64>,
    #[serde(deserialize_with = "flex::opt_i64")]
    pub filled_guest_seats: Option<i64>,
    #[serde(deserialize_with = "flex::opt_i64")]
    pub total_member_seats: Option<i64>,
    #[serde(deserialize_with = "flex::opt_i64")]
    pub total_guest_seats: Option<i64>,
    #[serde(deserialize_with = "flex::opt_i64")]
    pub empty_member_seats: Option<i64>,
    #[serde(deserialize_with = "flex::opt_i64")]
    pub empty_guest_seats: Option<i64>,
}
