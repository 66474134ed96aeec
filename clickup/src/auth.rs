//! OAuth token exchange e usuário autenticado

use serde::{Deserialize, Serialize};

use crate::client::ClickUpClient;
use crate::error::{ClickUpError, Result, ResultExt};
use crate::transport::{Request, OAUTH_TOKEN_PATH};
use crate::types::User;

/// Parâmetros da troca `code → access_token`
#[derive(Debug, Clone, Default, Serialize)]
pub struct OAuthTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
}

pub struct AuthManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> AuthManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Troca o authorization code por um access token
    ///
    /// Esta chamada NÃO envia o header `Authorization`.
    pub async fn token(&self, request: &OAuthTokenRequest) -> Result<OAuthToken> {
        const OP: &str = "exchange oauth token";

        if request.client_id.trim().is_empty() {
            return Err(ClickUpError::FieldRequired("client_id")).op(OP);
        }
        if request.client_secret.trim().is_empty() {
            return Err(ClickUpError::FieldRequired("client_secret")).op(OP);
        }
        if request.code.trim().is_empty() {
            return Err(ClickUpError::FieldRequired("code")).op(OP);
        }

        let req = Request::post(OAUTH_TOKEN_PATH).with_json(request).op(OP)?;
        self.client.execute(req).await.op(OP)
    }

    /// Usuário dono do token atual
    pub async fn authorized_user(&self) -> Result<User> {
        const OP: &str = "get authorized user";

        #[derive(Deserialize)]
        struct UserResponse {
            user: User,
        }

        let req = Request::get(self.client.v2("/user", &[]));
        let response: UserResponse = self.client.execute(req).await.op(OP)?;
        Ok(response.user)
    }
}
