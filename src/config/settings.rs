use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const APP_NAME: &str = "clickup";

/// Formato de saída dos comandos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colunas alinhadas
    #[default]
    Table,
    /// JSON indentado
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub workspace_id: Option<String>,
    pub keyring_backend: Option<String>,
    pub output: OutputFormat,
    pub user_agent: String,
}

/// Valores vindos das flags da linha de comando (maior precedência)
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub workspace_id: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Settings {
    /// Carrega: padrões < `<config_dir>/clickup/config.toml` < `./clickup.toml` < `CLICKUP_*` < flags
    pub fn new(overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        let mut files = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            files.push(dir.join(APP_NAME).join("config.toml"));
        }
        files.push(PathBuf::from(format!("{}.toml", APP_NAME)));

        Self::load(&files, overrides)
    }

    pub fn load(files: &[PathBuf], overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base_url", clickup::DEFAULT_BASE_URL)?
            .set_default("output", "table")?
            .set_default(
                "user_agent",
                concat!("clickup-cli/", env!("CARGO_PKG_VERSION")),
            )?;

        for path in files {
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("CLICKUP")
                .prefix_separator("_")
                .try_parsing(false),
        );

        if let Some(base_url) = &overrides.base_url {
            builder = builder.set_override("base_url", base_url.as_str())?;
        }
        if let Some(workspace_id) = &overrides.workspace_id {
            builder = builder.set_override("workspace_id", workspace_id.as_str())?;
        }
        if let Some(output) = overrides.output {
            let value = match output {
                OutputFormat::Table => "table",
                OutputFormat::Json => "json",
            };
            builder = builder.set_override("output", value)?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.normalize();
        Ok(settings)
    }

    /// Strings vazias contam como ausentes
    fn normalize(&mut self) {
        self.workspace_id = self
            .workspace_id
            .take()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        self.keyring_backend = self
            .keyring_backend
            .take()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
    }

    /// Diretório do backend de arquivo do secret store
    pub fn keyring_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join("keyring")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ENV_KEYS: [&str; 4] = [
        "CLICKUP_BASE_URL",
        "CLICKUP_WORKSPACE_ID",
        "CLICKUP_OUTPUT",
        "CLICKUP_KEYRING_BACKEND",
    ];

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars_unset(ENV_KEYS, f)
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let settings = Settings::load(&[], &SettingsOverrides::default()).unwrap();
            assert_eq!(settings.base_url, "https://api.clickup.com/api");
            assert_eq!(settings.output, OutputFormat::Table);
            assert_eq!(settings.workspace_id, None);
            assert!(settings.user_agent.starts_with("clickup-cli/"));
        });
    }

    #[test]
    fn test_file_then_env_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"http://from-file\"\nworkspace_id = \"111\"\nkeyring_backend = \"file\"\n",
        )
        .unwrap();

        clean_env(|| {
            let settings = Settings::load(&[path.clone()], &SettingsOverrides::default()).unwrap();
            assert_eq!(settings.base_url, "http://from-file");
            assert_eq!(settings.workspace_id.as_deref(), Some("111"));
            assert_eq!(settings.keyring_backend.as_deref(), Some("file"));

            temp_env::with_var("CLICKUP_WORKSPACE_ID", Some("222"), || {
                let settings =
                    Settings::load(&[path.clone()], &SettingsOverrides::default()).unwrap();
                assert_eq!(settings.workspace_id.as_deref(), Some("222"));

                let overrides = SettingsOverrides {
                    workspace_id: Some("333".to_string()),
                    output: Some(OutputFormat::Json),
                    ..Default::default()
                };
                let settings = Settings::load(&[path.clone()], &overrides).unwrap();
                assert_eq!(settings.workspace_id.as_deref(), Some("333"));
                assert_eq!(settings.output, OutputFormat::Json);
            });
        });
    }

    #[test]
    fn test_blank_workspace_is_absent() {
        clean_env(|| {
            temp_env::with_var("CLICKUP_WORKSPACE_ID", Some("  "), || {
                let settings = Settings::load(&[], &SettingsOverrides::default()).unwrap();
                assert_eq!(settings.workspace_id, None);
            });
        });
    }

    #[test]
    fn test_invalid_output_rejected() {
        clean_env(|| {
            temp_env::with_var("CLICKUP_OUTPUT", Some("yaml"), || {
                assert!(Settings::load(&[], &SettingsOverrides::default()).is_err());
            });
        });
    }
}
