//! Secret Store
//!
//! Guarda a credencial da CLI (slot `api_key`) no keychain do sistema ou
//! num diretório de arquivos criptografados (AES-256-GCM + PBKDF2).
//!
//! A escolha do backend acontece uma vez, em [`SecretStore::open`]:
//!
//! 1. `<APP>_KEYRING_BACKEND`, senão o valor do arquivo de configuração, senão `auto`
//! 2. `auto` no macOS → keychain; no Linux sem D-Bus → arquivo; no Linux com
//!    D-Bus → keychain com timeout de 5s, caindo para arquivo se o keychain falhar
//!
//! ## Exemplo de Uso
//!
//! ```rust,no_run
//! use secret_store::{SecretStore, StoreOptions};
//!
//! # async fn example() -> secret_store::Result<()> {
//! let options = StoreOptions::new("clickup", "/home/me/.local/share/clickup/keyring");
//! let store = SecretStore::open(options).await?;
//!
//! store.set_api_key("pk_123")?;
//! assert!(store.has_api_key()?);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod file;
pub mod native;
pub mod password;
pub mod plan;
pub mod store;

pub use backend::Backend;
pub use error::{Result, SecretStoreError, StoreErrorKind};
pub use plan::{plan_backends, resolve_requested, BackendKind, BackendPlan, Os, RequestedBackend};
pub use store::{SecretStore, StoreOptions};

/// Nome do slot da credencial da API
pub const API_KEY: &str = "api_key";
