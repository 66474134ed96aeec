//! Tipos de erro para o crate clickup
//!
//! Todo erro devolvido por uma façade carrega a tag da operação
//! (`"merge tasks: http request failed: ..."`). O tipo original continua
//! acessível via [`ClickUpError::kind`], mesmo através do wrapper.

use std::fmt;
use thiserror::Error;

/// Categoria estável de um erro, independente das tags de operação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IdRequired,
    NameRequired,
    TextRequired,
    SourceTasksRequired,
    FieldRequired,
    WorkspaceIdRequired,
    InvalidPath,
    Cancelled,
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    Request,
    Decode,
    Encode,
    Config,
    UnknownOption,
}

/// Erros do cliente ClickUp
#[derive(Debug, Error)]
pub enum ClickUpError {
    #[error("id is required")]
    IdRequired,

    #[error("name is required")]
    NameRequired,

    #[error("text is required")]
    TextRequired,

    #[error("source tasks are required")]
    SourceTasksRequired,

    /// Campo obrigatório específico do domínio (ex.: `client_id` do OAuth)
    #[error("{0} is required")]
    FieldRequired(&'static str),

    /// Endpoint v3 chamado sem workspace configurado
    #[error("workspace id is required for v3 endpoints")]
    WorkspaceIdRequired,

    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// Token de cancelamento externo disparado durante a requisição
    #[error("request cancelled")]
    Cancelled,

    /// Falha de rede / I/O do executor HTTP
    #[error("http request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Status fora de 2xx
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    #[error("configuration error: {0}")]
    Config(String),

    /// Campo ou opção inexistente na definição devolvida pela API
    #[error("{0}")]
    UnknownOption(String),

    /// Erro envolvido pela tag da operação
    #[error("{op}: {source}")]
    Context {
        op: &'static str,
        #[source]
        source: Box<ClickUpError>,
    },
}

impl ClickUpError {
    /// Categoria do erro raiz (atravessa as tags de operação)
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IdRequired => ErrorKind::IdRequired,
            Self::NameRequired => ErrorKind::NameRequired,
            Self::TextRequired => ErrorKind::TextRequired,
            Self::SourceTasksRequired => ErrorKind::SourceTasksRequired,
            Self::FieldRequired(_) => ErrorKind::FieldRequired,
            Self::WorkspaceIdRequired => ErrorKind::WorkspaceIdRequired,
            Self::InvalidPath(_) => ErrorKind::InvalidPath,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Http(_) => ErrorKind::Network,
            Self::Api(api) => api.kind(),
            Self::Encode(_) => ErrorKind::Encode,
            Self::Decode(_) | Self::BodyTooLarge(_) => ErrorKind::Decode,
            Self::Config(_) => ErrorKind::Config,
            Self::UnknownOption(_) => ErrorKind::UnknownOption,
            Self::Context { source, .. } => source.kind(),
        }
    }

    /// Erro raiz, sem as tags de operação
    pub fn root(&self) -> &ClickUpError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Tag da operação mais externa, se houver
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::Context { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Detalhes HTTP quando o erro veio de um status não-2xx
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root() {
            Self::Api(api) => Some(api),
            _ => None,
        }
    }

    /// `true` para erros de pré-condição detectados antes de qualquer I/O
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::IdRequired
                | ErrorKind::NameRequired
                | ErrorKind::TextRequired
                | ErrorKind::SourceTasksRequired
                | ErrorKind::FieldRequired
                | ErrorKind::WorkspaceIdRequired
        )
    }
}

/// Resposta de erro da API (status não-2xx)
///
/// O envelope `{"err": "...", "ECODE": "..."}` nem sempre vem; `code` e
/// `message` podem ficar vazios. O body bruto é preservado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub body: String,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self.status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::Request,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clickup api error (status {})", self.status)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if !self.code.is_empty() {
            write!(f, " [{}]", self.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Adiciona a tag da operação a um `Result`
pub trait ResultExt<T> {
    fn op(self, op: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn op(self, op: &'static str) -> Result<T> {
        self.map_err(|source| ClickUpError::Context {
            op,
            source: Box::new(source),
        })
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ClickUpError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> ApiError {
        ApiError {
            status,
            code: String::new(),
            message: String::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_status_to_kind() {
        assert_eq!(api(401).kind(), ErrorKind::Unauthorized);
        assert_eq!(api(403).kind(), ErrorKind::Forbidden);
        assert_eq!(api(404).kind(), ErrorKind::NotFound);
        assert_eq!(api(429).kind(), ErrorKind::RateLimited);
        assert_eq!(api(500).kind(), ErrorKind::ServerError);
        assert_eq!(api(503).kind(), ErrorKind::ServerError);
        assert_eq!(api(400).kind(), ErrorKind::Request);
        assert_eq!(api(418).kind(), ErrorKind::Request);
    }

    #[test]
    fn test_op_tag_preserves_kind() {
        let err: Result<()> = Err(ClickUpError::WorkspaceIdRequired);
        let err = err.op("move task").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::WorkspaceIdRequired);
        assert_eq!(err.op(), Some("move task"));
        assert!(matches!(err.root(), ClickUpError::WorkspaceIdRequired));
        assert_eq!(
            err.to_string(),
            "move task: workspace id is required for v3 endpoints"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            status: 401,
            code: "OAUTH_017".to_string(),
            message: "Authorization header required".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "clickup api error (status 401): Authorization header required [OAUTH_017]"
        );
        assert_eq!(api(500).to_string(), "clickup api error (status 500)");
    }

    #[test]
    fn test_api_error_reachable_through_context() {
        let err: Result<()> = Err(ClickUpError::Api(api(404)));
        let err = err.op("get task").unwrap_err();
        assert_eq!(err.api_error().map(|a| a.status), Some(404));
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_precondition_kinds() {
        assert!(ClickUpError::IdRequired.is_precondition());
        assert!(ClickUpError::FieldRequired("code").is_precondition());
        assert!(!ClickUpError::Cancelled.is_precondition());
    }
}
