//! Transporte HTTP compartilhado por todas as façades
//!
//! Uma chamada = um `Request` (método, path, query, body JSON opcional).
//! O transporte assina, envia, lê o body com limite e decodifica ou
//! devolve o erro da API.

use crate::error::{ApiError, ClickUpError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::query::Query;

/// Endpoint de troca de token OAuth; o único que não leva `Authorization`
pub const OAUTH_TOKEN_PATH: &str = "/v2/oauth/token";

/// Limite de leitura do body de resposta
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Uma requisição à API
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Option<String>,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Anexa a query; uma query vazia não gera `?`
    pub fn query(mut self, query: Query) -> Self {
        self.query = query.into_encoded();
        self
    }

    /// Serializa o body como JSON
    ///
    /// Um valor que serializa para `null` é descartado (sem body, sem
    /// Content-Type).
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(ClickUpError::Encode)?;
        if value.is_null() {
            self.body = None;
            return Ok(self);
        }
        let bytes = serde_json::to_vec(&value).map_err(ClickUpError::Encode)?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/')
            || self.path.contains("://")
            || self.path.contains('?')
            || self.path.split('/').any(is_dot_segment)
        {
            return Err(ClickUpError::InvalidPath(self.path.clone()));
        }
        Ok(())
    }
}

/// `.`/`..` (também `%2e`) seriam resolvidos pelo parser de URL e trocariam o recurso alvo
fn is_dot_segment(segment: &str) -> bool {
    let normalized = segment.to_ascii_lowercase().replace("%2e", ".");
    normalized == "." || normalized == ".."
}

/// Executor HTTP + credencial + base URL
#[derive(Debug)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: String,
    user_agent: String,
    credential: SecretString,
}

impl Transport {
    pub(crate) fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        credential: SecretString,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
            credential,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn url_for(&self, request: &Request) -> String {
        match &request.query {
            Some(query) => format!("{}{}?{}", self.base_url, request.path, query),
            None => format!("{}{}", self.base_url, request.path),
        }
    }

    /// Executa e devolve o body cru de uma resposta 2xx
    pub(crate) async fn send(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        request.validate()?;

        if cancel.is_cancelled() {
            return Err(ClickUpError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("{} {} cancelled", request.method, request.path);
                Err(ClickUpError::Cancelled)
            }
            result = self.round_trip(&request) => result,
        }
    }

    async fn round_trip(&self, request: &Request) -> Result<Vec<u8>> {
        let url = self.url_for(request);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(USER_AGENT, &self.user_agent);

        let credential = self.credential.expose_secret();
        if request.path != OAUTH_TOKEN_PATH && !credential.is_empty() {
            // A API espera o token cru, sem prefixo "Bearer "
            builder = builder.header(AUTHORIZATION, credential);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(ClickUpError::Http)?;
        let status = response.status();
        let body = read_body(response).await?;

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "{} {}",
            request.method,
            request.path
        );

        if !status.is_success() {
            let error = parse_error(status, &body);
            tracing::warn!(
                "ClickUp API error ({}) on {} {}: {}",
                error.status,
                request.method,
                request.path,
                error.message
            );
            return Err(ClickUpError::Api(error));
        }

        Ok(body)
    }
}

async fn read_body(mut response: reqwest::Response) -> Result<Vec<u8>> {
    if let Some(len) = response.content_length() {
        if len > MAX_BODY_BYTES as u64 {
            return Err(ClickUpError::BodyTooLarge(MAX_BODY_BYTES));
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ClickUpError::Http)? {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(ClickUpError::BodyTooLarge(MAX_BODY_BYTES));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Decodifica um body JSON no tipo alvo
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(ClickUpError::Decode)
}

fn string_field(json: &Value, key: &str) -> Option<String> {
    match json.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Interpreta o envelope `{"err": "...", "ECODE": "..."}`
///
/// Body não-JSON ou sem as chaves deixa `code`/`message` vazios.
pub(crate) fn parse_error(status: StatusCode, body: &[u8]) -> ApiError {
    let raw = String::from_utf8_lossy(body).into_owned();
    let (code, message) = match serde_json::from_slice::<Value>(body) {
        Ok(json) => {
            let message = string_field(&json, "err")
                .or_else(|| string_field(&json, "error"))
                .or_else(|| string_field(&json, "message"))
                .unwrap_or_default();
            let code = string_field(&json, "ECODE").unwrap_or_default();
            (code, message)
        }
        Err(_) => (String::new(), String::new()),
    };

    ApiError {
        status: status.as_u16(),
        code,
        message,
        body: raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_body_is_dropped() {
        let req = Request::post("/v2/task/1")
            .with_json(&Option::<Value>::None)
            .unwrap();
        assert!(req.body().is_none());

        let req = Request::post("/v2/task/1")
            .with_json(&json!({"name": "x"}))
            .unwrap();
        assert_eq!(req.body().unwrap(), br#"{"name":"x"}"#);
    }

    #[test]
    fn test_path_validation() {
        assert!(Request::get("/v2/team").validate().is_ok());
        assert!(Request::get("v2/team").validate().is_err());
        assert!(Request::get("https://evil.example/v2").validate().is_err());
        assert!(Request::get("/v2/team?x=1").validate().is_err());
    }

    #[test]
    fn test_dot_segments_rejected() {
        for bad in ["/v2/list/../task/x", "/v2/list/./task", "/v2/list/%2E%2e/task", "/v2/.."] {
            let err = Request::delete(bad).validate().unwrap_err();
            assert_eq!(err.kind(), crate::error::ErrorKind::InvalidPath, "{}", bad);
        }
        // escapado pelo PathBuilder continua sendo um segmento comum
        assert!(Request::get(crate::paths::v2("/task/{}", &["%2e%2e"])).validate().is_ok());
        assert!(Request::get("/v2/task/a..b").validate().is_ok());
    }

    #[test]
    fn test_empty_query_adds_no_question_mark() {
        let req = Request::get("/v2/team").query(Query::new().bool("archived", false));
        assert_eq!(req.query_string(), None);
    }

    #[test]
    fn test_parse_error_envelope() {
        let err = parse_error(
            StatusCode::UNAUTHORIZED,
            br#"{"err":"Token invalid","ECODE":"OAUTH_025"}"#,
        );
        assert_eq!(err.status, 401);
        assert_eq!(err.code, "OAUTH_025");
        assert_eq!(err.message, "Token invalid");
    }

    #[test]
    fn test_parse_error_fallbacks() {
        let err = parse_error(StatusCode::BAD_REQUEST, br#"{"error":"bad input"}"#);
        assert_eq!(err.message, "bad input");
        assert_eq!(err.code, "");

        let err = parse_error(StatusCode::BAD_GATEWAY, b"<html>upstream</html>");
        assert_eq!(err.message, "");
        assert_eq!(err.body, "<html>upstream</html>");

        let err = parse_error(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.status, 404);
        assert!(err.body.is_empty());
    }
}
