//! Contrato comum dos backends

use crate::error::{Result, SecretStoreError};

/// Backend de armazenamento de segredos
///
/// Operações síncronas; `get` devolve `None` para chave ausente e `delete`
/// de chave ausente é `Ok(())`.
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;
}

/// Chaves aceitas: `[A-Za-z0-9._-]`, sem começar com `.`
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(SecretStoreError::InvalidKey(key.to_string()))
    }
}
