#![allow(dead_code)]

use clickup::ClickUpClient;
use wiremock::MockServer;

pub const TOKEN: &str = "pk_test_token";
pub const USER_AGENT: &str = "clickup-tests/1.0";

/// Cliente apontado para o mock server, sem workspace
pub fn client(server: &MockServer) -> ClickUpClient {
    ClickUpClient::builder(TOKEN)
        .base_url(server.uri())
        .user_agent(USER_AGENT)
        .build()
        .expect("client")
}

/// Cliente com workspace configurado (endpoints v3)
pub fn client_with_workspace(server: &MockServer, workspace_id: &str) -> ClickUpClient {
    ClickUpClient::builder(TOKEN)
        .base_url(server.uri())
        .user_agent(USER_AGENT)
        .workspace_id(workspace_id)
        .build()
        .expect("client")
}

/// Número de requisições que chegaram ao mock server
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
