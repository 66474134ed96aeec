//! Senha do backend de arquivo
//!
//! Ordem: override explícito, variável `<APP>_KEYRING_PASS`, prompt no
//! terminal. Resolvida na primeira leitura/escrita e guardada em cache.

use std::io::IsTerminal;

use once_cell::sync::OnceCell;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, SecretStoreError};

pub struct PasswordSource {
    env_var: String,
    prompt: String,
    cached: OnceCell<SecretString>,
    is_tty: fn() -> bool,
}

fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

impl PasswordSource {
    pub fn new(env_var: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            prompt: prompt.into(),
            cached: OnceCell::new(),
            is_tty: stdin_is_terminal,
        }
    }

    /// Troca a detecção de terminal (stdin por padrão)
    pub fn with_tty_check(mut self, is_tty: fn() -> bool) -> Self {
        self.is_tty = is_tty;
        self
    }

    /// Fonte com senha fixa (não consulta ambiente nem terminal)
    pub fn fixed(password: SecretString) -> Self {
        let cached = OnceCell::new();
        let _ = cached.set(password);
        Self {
            env_var: String::new(),
            prompt: String::new(),
            cached,
            is_tty: stdin_is_terminal,
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn get(&self) -> Result<&SecretString> {
        self.cached.get_or_try_init(|| self.resolve())
    }

    fn resolve(&self) -> Result<SecretString> {
        if let Ok(value) = std::env::var(&self.env_var) {
            if !value.is_empty() {
                tracing::debug!("Senha do keyring lida de {}", self.env_var);
                return Ok(SecretString::from(value));
            }
        }

        if !(self.is_tty)() {
            return Err(SecretStoreError::NoTty {
                env_var: self.env_var.clone(),
            });
        }

        let password = dialoguer::Password::new()
            .with_prompt(&self.prompt)
            .allow_empty_password(false)
            .interact()
            .map_err(|e| SecretStoreError::read("password", e))?;

        Ok(SecretString::from(password))
    }
}

impl std::fmt::Debug for PasswordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordSource")
            .field("env_var", &self.env_var)
            .field("cached", &self.cached.get().is_some())
            .finish()
    }
}

/// Compara sem expor a senha em logs
pub(crate) fn is_blank(password: &SecretString) -> bool {
    password.expose_secret().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreErrorKind;

    #[test]
    fn test_env_password_is_cached() {
        temp_env::with_var("SECRET_STORE_TEST_PASS", Some("hunter2"), || {
            let source = PasswordSource::new("SECRET_STORE_TEST_PASS", "Password");
            assert_eq!(source.get().unwrap().expose_secret(), "hunter2");

            std::env::set_var("SECRET_STORE_TEST_PASS", "changed");
            assert_eq!(source.get().unwrap().expose_secret(), "hunter2");
        });
    }

    #[test]
    fn test_no_env_and_no_terminal() {
        temp_env::with_var_unset("SECRET_STORE_TEST_NOTTY_PASS", || {
            let source =
                PasswordSource::new("SECRET_STORE_TEST_NOTTY_PASS", "Password").with_tty_check(|| false);

            let err = source.get().unwrap_err();
            assert_eq!(err.kind(), StoreErrorKind::NoTty);
            assert!(err.to_string().contains("SECRET_STORE_TEST_NOTTY_PASS"));
        });
    }

    #[test]
    fn test_empty_env_password_is_ignored() {
        temp_env::with_var("SECRET_STORE_TEST_EMPTY_PASS", Some(""), || {
            let source =
                PasswordSource::new("SECRET_STORE_TEST_EMPTY_PASS", "Password").with_tty_check(|| false);
            assert_eq!(source.get().unwrap_err().kind(), StoreErrorKind::NoTty);
        });
    }

    #[test]
    fn test_fixed_password() {
        let source = PasswordSource::fixed(SecretString::from("s3cret".to_string()));
        assert_eq!(source.get().unwrap().expose_secret(), "s3cret");
        assert!(!is_blank(source.get().unwrap()));
    }
}
