//! Fachada do secret store: planejamento + abertura + slot `api_key`

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::backend::{validate_key, Backend};
use crate::error::{Result, SecretStoreError};
use crate::file::{FileBackend, DEFAULT_ITERATIONS};
use crate::native::NativeBackend;
use crate::password::PasswordSource;
use crate::plan::{self, BackendKind, BackendPlan, Os, RequestedBackend};
use crate::API_KEY;

/// Opções de abertura do store
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Nome da aplicação: serviço do keychain e prefixo das variáveis
    pub app: String,
    /// Diretório do backend de arquivo
    pub file_dir: PathBuf,
    /// Backend vindo do arquivo de configuração (a variável de ambiente tem precedência)
    pub configured_backend: Option<String>,
    pub iterations: u32,
    /// Senha fixa do backend de arquivo (ignora ambiente e prompt)
    pub password: Option<SecretString>,
}

impl StoreOptions {
    pub fn new(app: impl Into<String>, file_dir: impl Into<PathBuf>) -> Self {
        Self {
            app: app.into(),
            file_dir: file_dir.into(),
            configured_backend: None,
            iterations: DEFAULT_ITERATIONS,
            password: None,
        }
    }

    pub fn configured_backend(mut self, backend: impl Into<String>) -> Self {
        self.configured_backend = Some(backend.into());
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    fn env_prefix(&self) -> String {
        self.app
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// `<APP>_KEYRING_BACKEND`
    pub fn backend_env_var(&self) -> String {
        format!("{}_KEYRING_BACKEND", self.env_prefix())
    }

    /// `<APP>_KEYRING_PASS`
    pub fn password_env_var(&self) -> String {
        format!("{}_KEYRING_PASS", self.env_prefix())
    }

    fn remediation(&self) -> String {
        format!(
            "set {}=file and {}=<password>",
            self.backend_env_var(),
            self.password_env_var()
        )
    }
}

/// Secret store aberto sobre um backend concreto
pub struct SecretStore {
    backend: Box<dyn Backend>,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl SecretStore {
    /// Resolve o backend pedido, monta o plano para o host atual e abre
    pub async fn open(options: StoreOptions) -> Result<Self> {
        let env_value = std::env::var(options.backend_env_var()).ok();
        let requested =
            plan::resolve_requested(env_value.as_deref(), options.configured_backend.as_deref())?;

        let plan = plan::plan_backends(Os::current(), |key| std::env::var(key).ok(), requested);
        Self::open_plan(&options, requested, &plan).await
    }

    /// Abre o primeiro candidato do plano que funcionar
    ///
    /// Timeout do nativo interrompe na hora; falha comum passa ao próximo.
    pub async fn open_plan(
        options: &StoreOptions,
        requested: RequestedBackend,
        plan: &BackendPlan,
    ) -> Result<Self> {
        let remediation = options.remediation();
        let (app, timeout) = (options.app.as_str(), plan.open_timeout);
        let remediation = remediation.as_str();
        Self::open_with(options, requested, plan, move || {
            NativeBackend::open(app, timeout, remediation)
        })
        .await
    }

    async fn open_with<F, Fut, N>(
        options: &StoreOptions,
        requested: RequestedBackend,
        plan: &BackendPlan,
        mut open_native: F,
    ) -> Result<Self>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<N>>,
        N: Backend + 'static,
    {
        let mut last_error = None;

        for kind in &plan.candidates {
            match kind {
                BackendKind::File => {
                    tracing::info!(
                        "🔐 Secret store: backend de arquivo em {} (pedido: {})",
                        options.file_dir.display(),
                        requested
                    );
                    return Ok(Self::with_backend(Box::new(file_backend(options))));
                }
                BackendKind::Native => match open_native().await {
                    Ok(native) => {
                        tracing::info!("🔐 Secret store: keychain nativo (pedido: {})", requested);
                        return Ok(Self::with_backend(Box::new(native)));
                    }
                    Err(e @ SecretStoreError::KeyringTimeout { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!("Keychain indisponível: {}", e);
                        last_error = Some(e);
                    }
                },
            }
        }

        Err(last_error
            .unwrap_or_else(|| SecretStoreError::Unavailable("empty backend plan".to_string())))
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Lê um segredo; chave ausente → `NotFound`
    pub fn get_secret(&self, key: &str) -> Result<Vec<u8>> {
        validate_key(key)?;
        self.backend
            .get(key)?
            .ok_or_else(|| SecretStoreError::NotFound(key.to_string()))
    }

    pub fn set_secret(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.backend.set(key, value)
    }

    /// Remove um segredo; chave ausente não é erro
    pub fn delete_secret(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.backend.delete(key)
    }

    pub fn has_secret(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.backend.get(key)?.is_some())
    }

    pub fn get_api_key(&self) -> Result<SecretString> {
        let bytes = self.get_secret(API_KEY)?;
        let value = String::from_utf8(bytes)
            .map_err(|_| SecretStoreError::read(API_KEY, "stored value is not valid UTF-8"))?;
        Ok(SecretString::from(value))
    }

    pub fn set_api_key(&self, value: &str) -> Result<()> {
        self.set_secret(API_KEY, value.as_bytes())
    }

    pub fn delete_api_key(&self) -> Result<()> {
        self.delete_secret(API_KEY)
    }

    pub fn has_api_key(&self) -> Result<bool> {
        self.has_secret(API_KEY)
    }
}

fn file_backend(options: &StoreOptions) -> FileBackend {
    let source = match &options.password {
        Some(password) => PasswordSource::fixed(SecretString::from(
            password.expose_secret().to_string(),
        )),
        None => PasswordSource::new(
            options.password_env_var(),
            format!("Keyring password ({})", options.app),
        ),
    };
    FileBackend::new(&options.file_dir, Arc::new(source)).with_iterations(options.iterations)
}
