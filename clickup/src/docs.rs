//! Docs (API v3)
//!
//! Todos os métodos exigem workspace configurado no cliente.

use serde::{Deserialize, Serialize};

use crate::client::{require_id, require_name, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::query::Query;
use crate::transport::Request;
use crate::types::{Doc, DocPage};

/// Filtros da busca de docs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSearch {
    pub creator: i64,
    pub deleted: bool,
    pub archived: bool,
    pub parent_id: Option<String>,
    pub parent_type: Option<String>,
    pub limit: i64,
    /// Cursor da próxima página
    pub cursor: Option<String>,
}

impl DocSearch {
    fn to_query(&self) -> Query {
        Query::new()
            .int("creator", self.creator)
            .bool("deleted", self.deleted)
            .bool("archived", self.archived)
            .opt_str("parent_id", self.parent_id.as_deref())
            .opt_str("parent_type", self.parent_type.as_deref())
            .int("limit", self.limit)
            .opt_str("cursor", self.cursor.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocParentRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDocRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParentRef>,

    /// "private", "public", "personal" ou "hidden"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_page: Option<bool>,
}

pub struct DocManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> DocManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, search: &DocSearch) -> Result<Vec<Doc>> {
        const OP: &str = "search docs";

        #[derive(Deserialize)]
        struct DocsResponse {
            docs: Vec<Doc>,
        }

        let path = self.client.v3("/docs", &[]).op(OP)?;
        let req = Request::get(path).query(search.to_query());
        let response: DocsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.docs)
    }

    pub async fn get(&self, doc_id: &str) -> Result<Doc> {
        const OP: &str = "get doc";
        let doc_id = require_id(doc_id).op(OP)?;

        let path = self.client.v3("/docs/{}", &[doc_id]).op(OP)?;
        self.client.execute(Request::get(path)).await.op(OP)
    }

    pub async fn create(&self, request: &CreateDocRequest) -> Result<Doc> {
        const OP: &str = "create doc";
        require_name(&request.name).op(OP)?;

        let path = self.client.v3("/docs", &[]).op(OP)?;
        let req = Request::post(path).with_json(request).op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    /// Árvore de páginas do doc
    pub async fn pages(&self, doc_id: &str) -> Result<Vec<DocPage>> {
        const OP: &str = "list doc pages";
        let doc_id = require_id(doc_id).op(OP)?;

        let path = self.client.v3("/docs/{}/pages", &[doc_id]).op(OP)?;
        self.client.execute(Request::get(path)).await.op(OP)
    }
}
