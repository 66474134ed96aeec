//! Registro de webhooks e validação das entregas
//!
//! ```rust,no_run
//! use clickup::webhooks::{WebhookConfig, WebhookEvent};
//! use clickup::ClickUpClient;
//!
//! # async fn demo() -> clickup::Result<()> {
//! let client = ClickUpClient::new("pk_token")?;
//!
//! let created = client
//!     .webhooks()
//!     .create(
//!         "9001",
//!         &WebhookConfig {
//!             endpoint: "https://hooks.example.com/clickup".into(),
//!             events: vec![WebhookEvent::TaskCreated, WebhookEvent::TaskStatusUpdated],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! client.webhooks().delete(&created.id).await?;
//! # Ok(())
//! # }
//! ```

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::client::{require_id, ClickUpClient};
use crate::error::{ClickUpError, Result, ResultExt};
use crate::flex::FlexId;
use crate::transport::Request;

/// Corpo de criação/atualização
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Destino HTTPS das entregas
    pub endpoint: String,

    /// Vazio assina todos os eventos (`"*"`)
    pub events: Vec<WebhookEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// `active` | `inactive`; usado só no update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl WebhookConfig {
    fn validated(&self) -> Result<WebhookConfig> {
        if self.endpoint.trim().is_empty() {
            return Err(ClickUpError::FieldRequired("endpoint"));
        }
        let mut body = self.clone();
        if body.events.is_empty() {
            body.events.push(WebhookEvent::All);
        }
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<FlexId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<FlexId>,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub events: Vec<WebhookEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<WebhookHealth>,
    /// Chave do HMAC de `X-Signature`; a API só devolve na criação
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookHealth {
    pub status: String,
    pub fail_count: u32,
}

/// `{"id": "...", "webhook": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedWebhook {
    pub id: String,
    pub webhook: Webhook,
}

/// Nome de evento no formato da API (`taskCreated`, `listDeleted`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookEvent {
    #[serde(rename = "*")]
    All,
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskMoved,
    TaskStatusUpdated,
    TaskPriorityUpdated,
    TaskAssigneeUpdated,
    TaskDueDateUpdated,
    TaskTagUpdated,
    TaskTimeEstimateUpdated,
    TaskTimeTrackedUpdated,
    TaskCommentPosted,
    TaskCommentUpdated,
    ListCreated,
    ListUpdated,
    ListDeleted,
    FolderCreated,
    FolderUpdated,
    FolderDeleted,
    SpaceCreated,
    SpaceUpdated,
    SpaceDeleted,
    /// Qualquer nome que a API mande e não esteja listado acima
    #[serde(untagged)]
    Other(String),
}

/// Entrega recebida no endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub webhook_id: String,
    pub event: WebhookEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    /// Resto do corpo (`history_items`, etc.)
    #[serde(flatten)]
    pub data: serde_json::Value,
}

impl WebhookPayload {
    /// Confere `X-Signature` (hex do HMAC-SHA256 do corpo cru)
    ///
    /// `verify_slice` compara em tempo constante.
    pub fn verify_signature(signature: &str, secret: &str, body: &[u8]) -> bool {
        let Ok(expected) = hex::decode(signature.trim()) else {
            return false;
        };
        let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
            return false;
        };
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }
}

pub struct WebhookManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> WebhookManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Webhooks do workspace (a API só mostra os do usuário autenticado)
    pub async fn list(&self, team_id: &str) -> Result<Vec<Webhook>> {
        const OP: &str = "list webhooks";
        let team_id = require_id(team_id).op(OP)?;

        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            webhooks: Vec<Webhook>,
        }

        let req = Request::get(self.client.v2("/team/{}/webhook", &[team_id]));
        let envelope: Envelope = self.client.execute(req).await.op(OP)?;
        Ok(envelope.webhooks)
    }

    pub async fn create(&self, team_id: &str, config: &WebhookConfig) -> Result<CreatedWebhook> {
        const OP: &str = "create webhook";
        let team_id = require_id(team_id).op(OP)?;
        let body = config.validated().op(OP)?;

        let req = Request::post(self.client.v2("/team/{}/webhook", &[team_id]))
            .with_json(&body)
            .op(OP)?;
        let created: CreatedWebhook = self.client.execute(req).await.op(OP)?;

        tracing::info!("🔔 Webhook {} registrado para {}", created.id, body.endpoint);
        Ok(created)
    }

    /// Atualiza; sem `status` explícito o webhook fica `active`
    pub async fn update(&self, webhook_id: &str, config: &WebhookConfig) -> Result<Webhook> {
        const OP: &str = "update webhook";
        let webhook_id = require_id(webhook_id).op(OP)?;
        let mut body = config.validated().op(OP)?;
        body.status.get_or_insert_with(|| "active".to_string());

        #[derive(Deserialize)]
        struct Envelope {
            webhook: Webhook,
        }

        let req = Request::put(self.client.v2("/webhook/{}", &[webhook_id]))
            .with_json(&body)
            .op(OP)?;
        let envelope: Envelope = self.client.execute(req).await.op(OP)?;
        Ok(envelope.webhook)
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        const OP: &str = "delete webhook";
        let webhook_id = require_id(webhook_id).op(OP)?;

        let req = Request::delete(self.client.v2("/webhook/{}", &[webhook_id]));
        self.client.execute_discard(req).await.op(OP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn hmac_hex(key: &str, body: &[u8]) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes()).unwrap();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_event_names_match_api() {
        assert_eq!(json!(WebhookEvent::TaskCreated), json!("taskCreated"));
        assert_eq!(json!(WebhookEvent::TaskTimeTrackedUpdated), json!("taskTimeTrackedUpdated"));
        assert_eq!(json!(WebhookEvent::All), json!("*"));

        let parsed: WebhookEvent = serde_json::from_value(json!("listDeleted")).unwrap();
        assert_eq!(parsed, WebhookEvent::ListDeleted);
    }

    #[test]
    fn test_unknown_event_is_kept() {
        let event: WebhookEvent = serde_json::from_value(json!("goalCreated")).unwrap();
        assert_eq!(event, WebhookEvent::Other("goalCreated".to_string()));
        assert_eq!(json!(event), json!("goalCreated"));
    }

    #[test]
    fn test_no_events_means_wildcard() {
        let config = WebhookConfig {
            endpoint: "https://hooks.example.com/in".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(config.validated().unwrap()).unwrap();
        assert_eq!(body["events"], json!(["*"]));
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_blank_endpoint_rejected() {
        let err = WebhookConfig::default().validated().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldRequired);
    }

    #[test]
    fn test_payload_keeps_extra_fields() {
        let payload: WebhookPayload = serde_json::from_value(json!({
            "webhook_id": "wh1",
            "event": "taskMoved",
            "task_id": "t9",
            "history_items": [{"field": "section"}]
        }))
        .unwrap();
        assert_eq!(payload.event, WebhookEvent::TaskMoved);
        assert_eq!(payload.task_id.as_deref(), Some("t9"));
        assert_eq!(payload.data["history_items"][0]["field"], "section");
    }

    #[test]
    fn test_signature_check() {
        let body = br#"{"event":"taskCreated"}"#;
        let good = hmac_hex("s3cret", body);

        assert!(WebhookPayload::verify_signature(&good, "s3cret", body));
        assert!(WebhookPayload::verify_signature(&format!(" {good}\n"), "s3cret", body));
        assert!(!WebhookPayload::verify_signature("zz-not-hex", "s3cret", body));
        assert!(!WebhookPayload::verify_signature(&hmac_hex("other", body), "s3cret", body));
        assert!(!WebhookPayload::verify_signature(&good, "s3cret", b"{}"));
    }
}
