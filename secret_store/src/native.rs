//! Backend nativo: keychain do sistema via crate `keyring`
//!
//! macOS Keychain, Secret Service (Linux) ou Windows Credential Manager.
//! O serviço é o nome da aplicação e cada chave vira um "usuário".

use std::future::Future;
use std::time::Duration;

use keyring::Entry;

use crate::backend::{validate_key, Backend};
use crate::error::{Result, SecretStoreError};

const PROBE_USER: &str = "__probe__";

#[derive(Debug, Clone)]
pub struct NativeBackend {
    service: String,
}

impl NativeBackend {
    /// Abre o keychain testando uma leitura numa entrada sonda
    ///
    /// A sonda roda numa thread bloqueante; com `timeout` a espera é limitada
    /// e estourar o prazo devolve `KeyringTimeout` com a remediação.
    pub async fn open(
        service: &str,
        timeout: Option<Duration>,
        remediation: &str,
    ) -> Result<Self> {
        let probe_service = service.to_string();
        let probe = async move {
            tokio::task::spawn_blocking(move || probe(&probe_service))
                .await
                .map_err(|e| SecretStoreError::Unavailable(format!("keychain probe panicked: {}", e)))?
        };

        bounded(probe, timeout, remediation).await?;

        Ok(Self {
            service: service.to_string(),
        })
    }

    fn entry(&self, key: &str) -> std::result::Result<Entry, keyring::Error> {
        Entry::new(&self.service, key)
    }
}

/// Espera a sonda; passado o prazo devolve `KeyringTimeout` sem esperar mais
pub(crate) async fn bounded<F>(probe: F, timeout: Option<Duration>, remediation: &str) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let Some(limit) = timeout else {
        return probe.await;
    };

    match tokio::time::timeout(limit, probe).await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!("⏱️ Keychain não respondeu em {}s", limit.as_secs());
            Err(SecretStoreError::KeyringTimeout {
                seconds: limit.as_secs(),
                remediation: remediation.to_string(),
            })
        }
    }
}

fn probe(service: &str) -> Result<()> {
    let entry = Entry::new(service, PROBE_USER)
        .map_err(|e| SecretStoreError::Unavailable(e.to_string()))?;

    match entry.get_secret() {
        Ok(_) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(SecretStoreError::Unavailable(e.to_string())),
    }
}

impl Backend for NativeBackend {
    fn name(&self) -> &'static str {
        "keychain"
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let entry = self.entry(key).map_err(|e| SecretStoreError::read(key, e))?;

        match entry.get_secret() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretStoreError::read(key, e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let entry = self.entry(key).map_err(|e| SecretStoreError::write(key, e))?;
        entry
            .set_secret(value)
            .map_err(|e| SecretStoreError::write(key, e))
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let entry = self.entry(key).map_err(|e| SecretStoreError::write(key, e))?;

        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretStoreError::write(key, e)),
        }
    }
}
