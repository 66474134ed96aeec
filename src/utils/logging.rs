use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Nível padrão quando `RUST_LOG` não está definido
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Instala o subscriber global: `RUST_LOG` > `--verbose` (debug) > warn
///
/// Logs vão para stderr; stdout fica livre para a saída dos comandos.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

pub fn log_config_loaded(base_url: &str, workspace: Option<&str>) {
    debug!(
        "Configuration loaded: base_url={} workspace={}",
        base_url,
        workspace.unwrap_or("-")
    );
}

pub fn log_credential_source(source: &str) {
    debug!("🔑 Credential loaded from {}", source);
}

pub fn log_cancel_requested() {
    info!("Ctrl-C received, cancelling request");
}
