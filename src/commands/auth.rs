//! `clickup auth ...`: login, logout, status e troca OAuth

use std::io::IsTerminal;

use clickup::auth::OAuthTokenRequest;
use clickup::{CancellationToken, ClickUpClient};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::cli::AuthCommand;
use crate::config::Settings;
use crate::credentials;
use crate::output::{self, Tabular};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct AuthStatus {
    source: &'static str,
    user_id: String,
    username: String,
    email: Option<String>,
}

impl Tabular for AuthStatus {
    fn headers() -> &'static [&'static str] {
        &["SOURCE", "USER ID", "USERNAME", "EMAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.source.to_string(),
            self.user_id.clone(),
            self.username.clone(),
            output::or_dash(self.email.as_deref()),
        ]
    }
}

#[derive(Debug, Serialize)]
struct AccessToken {
    access_token: String,
}

impl Tabular for AccessToken {
    fn headers() -> &'static [&'static str] {
        &["ACCESS TOKEN"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.access_token.clone()]
    }
}

pub async fn run(
    cmd: AuthCommand,
    token_flag: Option<&str>,
    settings: &Settings,
    cancel: CancellationToken,
) -> AppResult<()> {
    match cmd {
        AuthCommand::Login => login(token_flag, settings, cancel).await,
        AuthCommand::Logout => {
            let store = credentials::open_store(settings).await?;
            store.delete_api_key()?;
            output::print_done("Token removed from the secret store", settings.output)
        }
        AuthCommand::Status => {
            let (credential, source) = credentials::resolve(token_flag, settings).await?;
            let client = credentials::build_client(settings, &credential)?.with_cancellation(cancel);
            let user = client.auth().authorized_user().await?;

            let status = AuthStatus {
                source: source.as_str(),
                user_id: user.id.to_string(),
                username: user.display_name().to_string(),
                email: user.email.clone(),
            };
            output::print_one(&status, settings.output)
        }
        AuthCommand::OauthToken {
            client_id,
            client_secret,
            code,
        } => {
            let client = ClickUpClient::anonymous()
                .base_url(settings.base_url.as_str())
                .user_agent(settings.user_agent.as_str())
                .build()?
                .with_cancellation(cancel);

            let request = OAuthTokenRequest {
                client_id,
                client_secret,
                code,
            };
            let token = client.auth().token(&request).await?;
            output::print_one(
                &AccessToken {
                    access_token: token.access_token,
                },
                settings.output,
            )
        }
    }
}

async fn login(
    token_flag: Option<&str>,
    settings: &Settings,
    cancel: CancellationToken,
) -> AppResult<()> {
    let credential = match credentials::from_flag_or_env(token_flag, None) {
        Some((credential, _)) => credential,
        None => prompt_token()?,
    };

    // valida antes de gravar
    let client = credentials::build_client(settings, &credential)?.with_cancellation(cancel);
    let user = client.auth().authorized_user().await?;

    let store = credentials::open_store(settings).await?;
    store.set_api_key(credential.expose_secret())?;
    tracing::info!("✅ Token salvo no backend {}", store.backend_name());

    output::print_done(
        &format!("Logged in as {}", user.display_name()),
        settings.output,
    )
}

fn prompt_token() -> AppResult<SecretString> {
    if !std::io::stdin().is_terminal() {
        return Err(AppError::ValidationError(
            "no token given: pass --token or run from an interactive terminal".to_string(),
        ));
    }

    let token = dialoguer::Password::new()
        .with_prompt("ClickUp API token")
        .interact()
        .map_err(|e| AppError::ValidationError(format!("could not read token: {}", e)))?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::ValidationError("token is required".to_string()));
    }
    Ok(SecretString::from(token.to_string()))
}
