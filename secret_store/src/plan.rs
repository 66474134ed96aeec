//! Seleção de backend
//!
//! Funções puras: o SO e o ambiente entram como parâmetros, o que deixa o
//! planner testável em qualquer host.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, SecretStoreError};

/// Limite para abrir o keychain quando ele pode travar (Linux + D-Bus)
pub const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Backend pedido pelo usuário
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestedBackend {
    #[default]
    Auto,
    Keychain,
    File,
}

impl RequestedBackend {
    /// Normaliza (trim + case-fold); só `auto`, `keychain` e `file` são aceitos
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "keychain" => Ok(Self::Keychain),
            "file" => Ok(Self::File),
            _ => Err(SecretStoreError::InvalidBackend(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Keychain => "keychain",
            Self::File => "file",
        }
    }
}

impl fmt::Display for RequestedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve o backend pedido: variável de ambiente, senão configuração, senão `auto`
///
/// Valores vazios contam como ausentes.
pub fn resolve_requested(
    env_value: Option<&str>,
    config_value: Option<&str>,
) -> Result<RequestedBackend> {
    let chosen = env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config_value.filter(|v| !v.trim().is_empty()));

    match chosen {
        Some(value) => RequestedBackend::parse(value),
        None => Ok(RequestedBackend::Auto),
    }
}

/// Família do sistema operacional do host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Other,
}

impl Os {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else {
            Os::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Native,
    File,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "keychain",
            Self::File => "file",
        }
    }
}

/// Candidatos em ordem de preferência + timeout de abertura do nativo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPlan {
    pub candidates: Vec<BackendKind>,
    pub open_timeout: Option<Duration>,
}

/// Monta o plano de backends
///
/// `env` é consultado só para `DBUS_SESSION_BUS_ADDRESS`.
pub fn plan_backends<F>(os: Os, env: F, requested: RequestedBackend) -> BackendPlan
where
    F: Fn(&str) -> Option<String>,
{
    let linux_timeout = match os {
        Os::Linux => Some(OPEN_TIMEOUT),
        _ => None,
    };

    match requested {
        RequestedBackend::File => BackendPlan {
            candidates: vec![BackendKind::File],
            open_timeout: None,
        },
        RequestedBackend::Keychain => BackendPlan {
            candidates: vec![BackendKind::Native],
            open_timeout: linux_timeout,
        },
        RequestedBackend::Auto => match os {
            Os::MacOs => BackendPlan {
                candidates: vec![BackendKind::Native],
                open_timeout: None,
            },
            Os::Linux => {
                let has_dbus = env("DBUS_SESSION_BUS_ADDRESS")
                    .map(|v| !v.trim().is_empty())
                    .unwrap_or(false);

                if has_dbus {
                    BackendPlan {
                        candidates: vec![BackendKind::Native, BackendKind::File],
                        open_timeout: Some(OPEN_TIMEOUT),
                    }
                } else {
                    // Sem sessão D-Bus o Secret Service trava; vai direto pro arquivo
                    BackendPlan {
                        candidates: vec![BackendKind::File],
                        open_timeout: None,
                    }
                }
            }
            Os::Other => BackendPlan {
                candidates: vec![BackendKind::Native, BackendKind::File],
                open_timeout: None,
            },
        },
    }
}
