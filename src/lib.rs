// Biblioteca da CLI do ClickUp
// Expõe módulos para uso em testes e no binário

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod output;
pub mod utils;

use clickup::CancellationToken;

use cli::{Cli, Command};
use commands::Context;
use config::{Settings, SettingsOverrides};
use utils::logging::log_config_loaded;
use utils::AppResult;

/// Executa o comando já parseado
///
/// `cancel` aborta a chamada em andamento (Ctrl-C no binário).
pub async fn run(cli: Cli, cancel: CancellationToken) -> AppResult<()> {
    let overrides = SettingsOverrides {
        base_url: cli.base_url.clone(),
        workspace_id: cli.workspace_id.clone(),
        output: cli.output,
    };
    let settings = Settings::new(&overrides)?;
    log_config_loaded(&settings.base_url, settings.workspace_id.as_deref());

    match cli.command {
        Command::Auth(cmd) => {
            commands::auth::run(cmd, cli.token.as_deref(), &settings, cancel).await
        }
        command => {
            let (credential, _) = credentials::resolve(cli.token.as_deref(), &settings).await?;
            let client = credentials::build_client(&settings, &credential)?.with_cancellation(cancel);
            let ctx = Context {
                client,
                format: settings.output,
            };
            commands::dispatch(&ctx, command).await
        }
    }
}
