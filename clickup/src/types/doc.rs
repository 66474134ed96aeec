//! Docs (API v3, escopada por workspace)

use serde::{Deserialize, Serialize};

use crate::flex::{self, FlexId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Doc {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<FlexId>,

    pub deleted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<FlexId>,
}

/// Onde o doc está pendurado (space/folder/list/...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocParent {
    pub id: FlexId,

    /// 4 = space, 5 = folder, 6 = list, 7 = everything, 12 = workspace
    #[serde(rename = "type", deserialize_with = "flex::opt_i64")]
    pub kind: Option<i64>,
}

/// Página de um doc (recursiva)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocPage {
    pub id: String,
    pub doc_id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<DocPage>,
}
