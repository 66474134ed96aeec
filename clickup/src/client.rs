//! Cliente HTTP para a API do ClickUp

use crate::error::{ClickUpError, Result};
use crate::paths;
use crate::transport::{self, Request, Transport};
use reqwest::Client as HttpClient;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::auth::AuthManager;
use crate::checklists::ChecklistManager;
use crate::comments::CommentManager;
use crate::docs::DocManager;
use crate::fields::CustomFieldManager;
use crate::folders::FolderManager;
use crate::lists::ListManager;
use crate::spaces::SpaceManager;
use crate::tags::TagManager;
use crate::tasks::TaskManager;
use crate::time_entries::TimeEntryManager;
use crate::webhooks::WebhookManager;
use crate::workspaces::WorkspaceManager;

/// URL base padrão da API
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api";

/// User-Agent padrão
pub const DEFAULT_USER_AGENT: &str = concat!("clickup-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
struct ClientInner {
    transport: Transport,
    workspace_id: Option<String>,
}

/// Cliente para interagir com a API do ClickUp (v2 + v3)
///
/// Imutável após a construção; `clone()` é barato e o cliente pode ser
/// usado de várias tasks ao mesmo tempo.
#[derive(Clone, Debug)]
pub struct ClickUpClient {
    inner: Arc<ClientInner>,
    cancel: CancellationToken,
}

/// Builder do [`ClickUpClient`]
#[derive(Debug)]
pub struct ClickUpClientBuilder {
    credential: String,
    base_url: String,
    user_agent: String,
    workspace_id: Option<String>,
    http_client: Option<HttpClient>,
    anonymous: bool,
}

impl ClickUpClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Workspace usado pelos endpoints v3; vazio ≡ ausente
    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        let workspace_id: String = workspace_id.into();
        let trimmed = workspace_id.trim();
        self.workspace_id = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Injeta um `reqwest::Client` já configurado (proxy, timeouts, testes)
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<ClickUpClient> {
        let credential = self.credential.trim();
        if credential.is_empty() && !self.anonymous {
            return Err(ClickUpError::FieldRequired("credential"));
        }

        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClickUpError::Config(format!(
                "base url must be http(s): {:?}",
                base_url
            )));
        }

        let http = match self.http_client {
            Some(http) => http,
            None => HttpClient::builder().build().map_err(|e| {
                ClickUpError::Config(format!("Failed to create HTTP client: {}", e))
            })?,
        };

        let transport = Transport::new(
            http,
            base_url,
            self.user_agent,
            SecretString::from(credential.to_string()),
        );

        tracing::debug!(
            base_url = transport.base_url(),
            workspace = self.workspace_id.as_deref().unwrap_or("-"),
            "ClickUp client ready"
        );

        Ok(ClickUpClient {
            inner: Arc::new(ClientInner {
                transport,
                workspace_id: self.workspace_id,
            }),
            cancel: CancellationToken::new(),
        })
    }
}

impl ClickUpClient {
    /// Inicia o builder com a credencial (token pessoal ou OAuth)
    pub fn builder(credential: impl Into<String>) -> ClickUpClientBuilder {
        ClickUpClientBuilder {
            credential: credential.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            workspace_id: None,
            http_client: None,
            anonymous: false,
        }
    }

    /// Builder sem credencial; serve só para a troca de código OAuth
    pub fn anonymous() -> ClickUpClientBuilder {
        ClickUpClientBuilder {
            anonymous: true,
            ..Self::builder("")
        }
    }

    /// Cria um novo cliente ClickUp com as configurações padrão
    pub fn new(credential: impl Into<String>) -> Result<Self> {
        Self::builder(credential).build()
    }

    /// Cópia do cliente cujas chamadas abortam quando `token` é cancelado
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: token,
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.inner.workspace_id.as_deref()
    }

    /// Obtém a URL base da API
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }

    pub fn user_agent(&self) -> &str {
        self.inner.transport.user_agent()
    }

    /// Path v2 com argumentos escapados
    pub fn v2(&self, template: &str, args: &[&str]) -> String {
        paths::v2(template, args)
    }

    /// Path v3 escopado pelo workspace do cliente
    pub fn v3(&self, template: &str, args: &[&str]) -> Result<String> {
        paths::v3(self.workspace_id(), template, args)
    }

    /// Executa a requisição e decodifica a resposta
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let body = self.inner.transport.send(request, &self.cancel).await?;
        transport::decode(&body)
    }

    /// Executa a requisição descartando o body da resposta
    pub async fn execute_discard(&self, request: Request) -> Result<()> {
        self.inner.transport.send(request, &self.cancel).await?;
        Ok(())
    }

    pub fn auth(&self) -> AuthManager<'_> {
        AuthManager::new(self)
    }

    pub fn workspaces(&self) -> WorkspaceManager<'_> {
        WorkspaceManager::new(self)
    }

    pub fn spaces(&self) -> SpaceManager<'_> {
        SpaceManager::new(self)
    }

    pub fn folders(&self) -> FolderManager<'_> {
        FolderManager::new(self)
    }

    pub fn lists(&self) -> ListManager<'_> {
        ListManager::new(self)
    }

    pub fn tasks(&self) -> TaskManager<'_> {
        TaskManager::new(self)
    }

    pub fn comments(&self) -> CommentManager<'_> {
        CommentManager::new(self)
    }

    pub fn time(&self) -> TimeEntryManager<'_> {
        TimeEntryManager::new(self)
    }

    pub fn tags(&self) -> TagManager<'_> {
        TagManager::new(self)
    }

    pub fn checklists(&self) -> ChecklistManager<'_> {
        ChecklistManager::new(self)
    }

    pub fn fields(&self) -> CustomFieldManager<'_> {
        CustomFieldManager::new(self)
    }

    pub fn webhooks(&self) -> WebhookManager<'_> {
        WebhookManager::new(self)
    }

    pub fn docs(&self) -> DocManager<'_> {
        DocManager::new(self)
    }
}

/// Valida um id obrigatório (não vazio após trim)
pub(crate) fn require_id(id: &str) -> Result<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(ClickUpError::IdRequired)
    } else {
        Ok(trimmed)
    }
}

pub(crate) fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(ClickUpError::NameRequired)
    } else {
        Ok(())
    }
}

pub(crate) fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(ClickUpError::TextRequired)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_client_creation() {
        let client = ClickUpClient::new("pk_test").unwrap();
        assert_eq!(client.base_url(), "https://api.clickup.com/api");
        assert_eq!(client.workspace_id(), None);
        assert!(client.user_agent().starts_with("clickup-rs/"));
    }

    #[test]
    fn test_blank_credential_rejected() {
        let err = ClickUpClient::new("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldRequired);
        assert_eq!(err.to_string(), "credential is required");
    }

    #[test]
    fn test_builder_options() {
        let client = ClickUpClient::builder("pk_test")
            .base_url("http://localhost:9999/api/")
            .user_agent("tests/1.0")
            .workspace_id(" 42 ")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:9999/api");
        assert_eq!(client.user_agent(), "tests/1.0");
        assert_eq!(client.workspace_id(), Some("42"));
        assert_eq!(
            client.v3("/docs/{}", &["d1"]).unwrap(),
            "/v3/workspaces/42/docs/d1"
        );
    }

    #[test]
    fn test_blank_workspace_is_absent() {
        let client = ClickUpClient::builder("pk_test")
            .workspace_id("")
            .build()
            .unwrap();
        assert_eq!(client.workspace_id(), None);
        assert_eq!(
            client.v3("/docs", &[]).unwrap_err().kind(),
            ErrorKind::WorkspaceIdRequired
        );
    }

    #[test]
    fn test_anonymous_builder() {
        let client = ClickUpClient::anonymous().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClickUpClient::builder("pk_test")
            .base_url("ftp://nope")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_with_cancellation_shares_state() {
        let client = ClickUpClient::builder("pk_test")
            .workspace_id("7")
            .build()
            .unwrap();
        let token = CancellationToken::new();
        let bound = client.with_cancellation(token.clone());

        token.cancel();
        assert!(bound.cancellation_token().is_cancelled());
        assert!(!client.cancellation_token().is_cancelled());
        assert_eq!(bound.workspace_id(), Some("7"));
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(require_id(" t1 ").unwrap(), "t1");
        assert_eq!(require_id(" ").unwrap_err().kind(), ErrorKind::IdRequired);
        assert!(require_name("").is_err());
        assert!(require_text("\n").is_err());
    }
}
