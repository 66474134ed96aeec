use clickup::{ClickUpError, ErrorKind};
use secret_store::SecretStoreError;
use std::fmt;

/// Código de saída do processo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// Validação local: pré-condição, config, secret store, encode, path
    Local = 1,
    /// Transporte ou serviço: rede, 404, 429, 5xx, decode, cancelamento
    Remote = 2,
    /// Autenticação: 401, 403, credencial ausente
    Auth = 3,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug)]
pub enum AppError {
    ClickUp(ClickUpError),
    SecretStore(SecretStoreError),
    ConfigError(String),
    ValidationError(String),
    MissingCredential,
    OutputError(anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::ClickUp(err) => exit_code_for(err.kind()),
            AppError::SecretStore(_) => ExitCode::Local,
            AppError::ConfigError(_) => ExitCode::Local,
            AppError::ValidationError(_) => ExitCode::Local,
            AppError::MissingCredential => ExitCode::Auth,
            AppError::OutputError(_) => ExitCode::Local,
        }
    }

    /// Dica de remediação exibida abaixo da mensagem
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::MissingCredential => Some("run `clickup auth login` or set CLICKUP_API_TOKEN"),
            AppError::ClickUp(err) => match err.kind() {
                ErrorKind::Unauthorized => Some("the stored token was rejected; run `clickup auth login` again"),
                ErrorKind::WorkspaceIdRequired => Some("pass --workspace-id or set CLICKUP_WORKSPACE_ID"),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Mapeia a categoria do erro da API para o código de saída
pub fn exit_code_for(kind: ErrorKind) -> ExitCode {
    match kind {
        ErrorKind::Unauthorized | ErrorKind::Forbidden => ExitCode::Auth,
        ErrorKind::Network
        | ErrorKind::NotFound
        | ErrorKind::RateLimited
        | ErrorKind::ServerError
        | ErrorKind::Request
        | ErrorKind::Decode
        | ErrorKind::Cancelled => ExitCode::Remote,
        ErrorKind::IdRequired
        | ErrorKind::NameRequired
        | ErrorKind::TextRequired
        | ErrorKind::SourceTasksRequired
        | ErrorKind::FieldRequired
        | ErrorKind::WorkspaceIdRequired
        | ErrorKind::InvalidPath
        | ErrorKind::Encode
        | ErrorKind::Config
        | ErrorKind::UnknownOption => ExitCode::Local,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ClickUp(err) => write!(f, "{}", err),
            AppError::SecretStore(err) => write!(f, "Secret store error: {}", err),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::MissingCredential => write!(f, "No ClickUp credential found"),
            AppError::OutputError(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ClickUpError> for AppError {
    fn from(err: ClickUpError) -> Self {
        AppError::ClickUp(err)
    }
}

impl From<SecretStoreError> for AppError {
    fn from(err: SecretStoreError) -> Self {
        AppError::SecretStore(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::OutputError(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::OutputError(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::MissingCredential.exit_code(), ExitCode::Auth);
        assert_eq!(
            AppError::ClickUp(ClickUpError::IdRequired).exit_code(),
            ExitCode::Local
        );
        assert_eq!(
            AppError::ClickUp(ClickUpError::Cancelled).exit_code().code(),
            2
        );
        assert_eq!(
            AppError::ConfigError("bad".to_string()).exit_code().code(),
            1
        );
    }

    #[test]
    fn test_api_status_exit_codes() {
        let api = |status| {
            AppError::ClickUp(ClickUpError::Api(clickup::ApiError {
                status,
                code: String::new(),
                message: String::new(),
                body: String::new(),
            }))
        };
        assert_eq!(api(401).exit_code(), ExitCode::Auth);
        assert_eq!(api(403).exit_code(), ExitCode::Auth);
        assert_eq!(api(404).exit_code(), ExitCode::Remote);
        assert_eq!(api(429).exit_code(), ExitCode::Remote);
        assert_eq!(api(503).exit_code(), ExitCode::Remote);
    }

    #[test]
    fn test_hints() {
        assert!(AppError::MissingCredential.hint().unwrap().contains("auth login"));
        assert!(AppError::ValidationError("x".into()).hint().is_none());
    }
}
