/// CLI do ClickUp
///
/// Fluxo:
/// - `.env` (opcional) → configuração em camadas → credencial
/// - comando executado com token de cancelamento ligado ao Ctrl-C
/// - código de saída: 0 ok, 1 erro local, 2 transporte/serviço, 3 autenticação
use clap::Parser;

use clickup::CancellationToken;
use clickup_cli::cli::Cli;
use clickup_cli::utils::logging::{init_tracing, log_cancel_requested};
use clickup_cli::utils::ExitCode;

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if dotenv_loaded {
        tracing::debug!("Arquivo .env carregado");
    }

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log_cancel_requested();
            on_ctrl_c.cancel();
        }
    });

    let code = match clickup_cli::run(cli, cancel).await {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("error: {}", err);
            if let Some(hint) = err.hint() {
                eprintln!("hint: {}", hint);
            }
            err.exit_code()
        }
    };

    // exit direto: não espera threads bloqueantes (ex.: sonda do keychain que estourou o prazo)
    std::process::exit(code.code());
}
