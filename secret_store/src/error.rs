use thiserror::Error;

/// Categoria estável de um [`SecretStoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    InvalidBackend,
    NoTty,
    KeyringTimeout,
    Unavailable,
    NotFound,
    InvalidKey,
    Read,
    Write,
}

/// Erros do secret store
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("invalid keyring backend {0:?} (expected auto, keychain or file)")]
    InvalidBackend(String),

    /// Backend de arquivo sem senha no ambiente e stdin não é um terminal
    #[error("no keyring password available: set {env_var} or run from an interactive terminal")]
    NoTty { env_var: String },

    #[error("keyring did not respond within {seconds}s: {remediation}")]
    KeyringTimeout { seconds: u64, remediation: String },

    /// Nenhum candidato do plano abriu
    #[error("no keyring backend available: {0}")]
    Unavailable(String),

    #[error("secret {0:?} not found")]
    NotFound(String),

    #[error("invalid secret key {0:?}: use letters, digits, '.', '_' or '-'")]
    InvalidKey(String),

    #[error("read secret {key:?}: {message}")]
    Read { key: String, message: String },

    #[error("write secret {key:?}: {message}")]
    Write { key: String, message: String },
}

impl SecretStoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::InvalidBackend(_) => StoreErrorKind::InvalidBackend,
            Self::NoTty { .. } => StoreErrorKind::NoTty,
            Self::KeyringTimeout { .. } => StoreErrorKind::KeyringTimeout,
            Self::Unavailable(_) => StoreErrorKind::Unavailable,
            Self::NotFound(_) => StoreErrorKind::NotFound,
            Self::InvalidKey(_) => StoreErrorKind::InvalidKey,
            Self::Read { .. } => StoreErrorKind::Read,
            Self::Write { .. } => StoreErrorKind::Write,
        }
    }

    pub(crate) fn read(key: &str, message: impl ToString) -> Self {
        Self::Read {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(key: &str, message: impl ToString) -> Self {
        Self::Write {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SecretStoreError>;
