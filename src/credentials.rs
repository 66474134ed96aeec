//! Bootstrap da credencial: `--token` > `CLICKUP_API_TOKEN` > secret store

use clickup::ClickUpClient;
use secrecy::{ExposeSecret, SecretString};
use secret_store::{SecretStore, StoreErrorKind, StoreOptions};

use crate::config::settings::{Settings, APP_NAME};
use crate::utils::logging::log_credential_source;
use crate::utils::{AppError, AppResult};

pub const TOKEN_ENV_VAR: &str = "CLICKUP_API_TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Flag,
    Env,
    Store,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Flag => "--token",
            CredentialSource::Env => TOKEN_ENV_VAR,
            CredentialSource::Store => "secret store",
        }
    }
}

/// Trim; vazio ≡ ausente
fn candidate(value: Option<&str>) -> Option<SecretString> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| SecretString::from(v.to_string()))
}

/// Resolve sem tocar no secret store
pub fn from_flag_or_env(
    flag: Option<&str>,
    env: Option<&str>,
) -> Option<(SecretString, CredentialSource)> {
    candidate(flag)
        .map(|c| (c, CredentialSource::Flag))
        .or_else(|| candidate(env).map(|c| (c, CredentialSource::Env)))
}

pub async fn open_store(settings: &Settings) -> AppResult<SecretStore> {
    let mut options = StoreOptions::new(APP_NAME, Settings::keyring_dir());
    if let Some(backend) = &settings.keyring_backend {
        options = options.configured_backend(backend.as_str());
    }
    Ok(SecretStore::open(options).await?)
}

/// Credencial + origem; nenhuma fonte → `MissingCredential`
pub async fn resolve(
    flag: Option<&str>,
    settings: &Settings,
) -> AppResult<(SecretString, CredentialSource)> {
    let env = std::env::var(TOKEN_ENV_VAR).ok();
    if let Some(found) = from_flag_or_env(flag, env.as_deref()) {
        log_credential_source(found.1.as_str());
        return Ok(found);
    }

    let store = open_store(settings).await?;
    from_store(&store)
}

/// Lê o slot `api_key`; chave ausente ou vazia → `MissingCredential`
pub fn from_store(store: &SecretStore) -> AppResult<(SecretString, CredentialSource)> {
    match store.get_api_key() {
        Ok(secret) => match candidate(Some(secret.expose_secret())) {
            Some(secret) => {
                log_credential_source(CredentialSource::Store.as_str());
                Ok((secret, CredentialSource::Store))
            }
            None => Err(AppError::MissingCredential),
        },
        Err(e) if e.kind() == StoreErrorKind::NotFound => Err(AppError::MissingCredential),
        Err(e) => Err(e.into()),
    }
}

pub fn build_client(settings: &Settings, credential: &SecretString) -> AppResult<ClickUpClient> {
    let mut builder = ClickUpClient::builder(credential.expose_secret())
        .base_url(settings.base_url.as_str())
        .user_agent(settings.user_agent.as_str());
    if let Some(workspace_id) = &settings.workspace_id {
        builder = builder.workspace_id(workspace_id.as_str());
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secret_store::{BackendKind, BackendPlan, RequestedBackend};

    #[test]
    fn test_flag_wins_over_env() {
        let (secret, source) = from_flag_or_env(Some(" pk_flag "), Some("pk_env")).unwrap();
        assert_eq!(secret.expose_secret(), "pk_flag");
        assert_eq!(source, CredentialSource::Flag);
    }

    #[test]
    fn test_blank_flag_falls_back_to_env() {
        let (secret, source) = from_flag_or_env(Some("   "), Some("pk_env")).unwrap();
        assert_eq!(secret.expose_secret(), "pk_env");
        assert_eq!(source, CredentialSource::Env);
    }

    #[test]
    fn test_nothing_found() {
        assert!(from_flag_or_env(None, Some("")).is_none());
    }

    #[test]
    fn test_build_client_uses_settings() {
        let settings = Settings {
            base_url: "http://localhost:1234/api".to_string(),
            workspace_id: Some("9001".to_string()),
            keyring_backend: None,
            output: crate::config::OutputFormat::Json,
            user_agent: "clickup-cli/test".to_string(),
        };
        let client = build_client(&settings, &SecretString::from("pk_1".to_string())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
        assert_eq!(client.workspace_id(), Some("9001"));
        assert_eq!(client.user_agent(), "clickup-cli/test");
    }

    async fn file_store(dir: &std::path::Path) -> SecretStore {
        let options = StoreOptions::new(APP_NAME, dir)
            .iterations(1_000)
            .password(SecretString::from("pw".to_string()));
        let plan = BackendPlan {
            candidates: vec![BackendKind::File],
            open_timeout: None,
        };
        SecretStore::open_plan(&options, RequestedBackend::File, &plan)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_is_missing_credential() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(dir.path()).await;

        let err = from_store(&store).unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
        assert_eq!(err.exit_code().code(), 3);
    }

    #[tokio::test]
    async fn test_stored_token_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(dir.path()).await;
        store.set_api_key(" pk_stored \n").unwrap();

        let (secret, source) = from_store(&store).unwrap();
        assert_eq!(secret.expose_secret(), "pk_stored");
        assert_eq!(source, CredentialSource::Store);
    }
}
