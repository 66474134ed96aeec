//! Comentários em tasks, listas e respostas em thread

use serde::{Deserialize, Serialize};

use crate::client::{require_id, require_text, ClickUpClient};
use crate::error::{Result, ResultExt};
use crate::transport::Request;
use crate::types::{Comment, CommentCreated};

/// Payload de criação de comentário ou resposta
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,

    /// Responsável pelo comentário; opcional em todos os endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

impl CreateCommentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            comment_text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCommentRequest {
    pub comment_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,

    /// Tri-state: `Some(false)` reabre, `None` não mexe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Deserialize)]
struct CommentsResponse {
    comments: Vec<Comment>,
}

pub struct CommentManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> CommentManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, task_id: &str) -> Result<Vec<Comment>> {
        const OP: &str = "list task comments";
        let task_id = require_id(task_id).op(OP)?;

        let req = Request::get(self.client.v2("/task/{}/comment", &[task_id]));
        let response: CommentsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.comments)
    }

    pub async fn list_for_list(&self, list_id: &str) -> Result<Vec<Comment>> {
        const OP: &str = "list list comments";
        let list_id = require_id(list_id).op(OP)?;

        let req = Request::get(self.client.v2("/list/{}/comment", &[list_id]));
        let response: CommentsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.comments)
    }

    pub async fn add(&self, task_id: &str, request: &CreateCommentRequest) -> Result<CommentCreated> {
        const OP: &str = "add task comment";
        let task_id = require_id(task_id).op(OP)?;
        require_text(&request.comment_text).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/comment", &[task_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn add_to_list(
        &self,
        list_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CommentCreated> {
        const OP: &str = "add list comment";
        let list_id = require_id(list_id).op(OP)?;
        require_text(&request.comment_text).op(OP)?;

        let req = Request::post(self.client.v2("/list/{}/comment", &[list_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    pub async fn update(&self, comment_id: &str, request: &UpdateCommentRequest) -> Result<()> {
        const OP: &str = "update comment";
        let comment_id = require_id(comment_id).op(OP)?;
        require_text(&request.comment_text).op(OP)?;

        let req = Request::put(self.client.v2("/comment/{}", &[comment_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        const OP: &str = "delete comment";
        let comment_id = require_id(comment_id).op(OP)?;

        let req = Request::delete(self.client.v2("/comment/{}", &[comment_id]));
        self.client.execute_discard(req).await.op(OP)
    }

    /// Respostas em thread de um comentário
    pub async fn replies(&self, comment_id: &str) -> Result<Vec<Comment>> {
        const OP: &str = "list comment replies";
        let comment_id = require_id(comment_id).op(OP)?;

        let req = Request::get(self.client.v2("/comment/{}/reply", &[comment_id]));
        let response: CommentsResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.comments)
    }

    pub async fn reply(
        &self,
        comment_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CommentCreated> {
        const OP: &str = "reply to comment";
        let comment_id = require_id(comment_id).op(OP)?;
        require_text(&request.comment_text).op(OP)?;

        let req = Request::post(self.client.v2("/comment/{}/reply", &[comment_id]))
            .with_json(request)
            .op(OP)?;
        self.client.execute(req).await.op(OP)
    }
}
