mod common;

use std::time::Duration;

use clickup::auth::OAuthTokenRequest;
use clickup::{CancellationToken, ClickUpError, ErrorKind, Request};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_authorization_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/team"))
        .and(header("authorization", common::TOKEN))
        .and(header("user-agent", common::USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [
            {"id": "9001", "name": "Acme", "members": [{"user": {"id": 1, "username": "ana"}}]}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let teams = common::client(&server).workspaces().list().await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].members[0].user().display_name(), "ana");
}

#[tokio::test]
async fn test_oauth_token_exchange_omits_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/oauth/token"))
        .and(body_json(json!({
            "client_id": "MYID",
            "client_secret": "MYSECRET",
            "code": "MYCODE"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})))
        .expect(1)
        .mount(&server)
        .await;

    let token = common::client(&server)
        .auth()
        .token(&OAuthTokenRequest {
            client_id: "MYID".to_string(),
            client_secret: "MYSECRET".to_string(),
            code: "MYCODE".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token.access_token, "tok");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[0].headers.get("content-type").map(|v| v.as_bytes()),
        Some(&b"application/json"[..])
    );
}

#[tokio::test]
async fn test_oauth_requires_all_fields() {
    let server = MockServer::start().await;

    let err = common::client(&server)
        .auth()
        .token(&OAuthTokenRequest {
            client_id: "MYID".to_string(),
            client_secret: String::new(),
            code: "MYCODE".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FieldRequired);
    assert_eq!(err.to_string(), "exchange oauth token: client_secret is required");
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn test_error_envelope_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/task/t1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"err": "Token invalid", "ECODE": "OAUTH_025"})),
        )
        .mount(&server)
        .await;

    let err = common::client(&server)
        .tasks()
        .get("t1", &Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.op(), Some("get task"));
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 401);
    assert_eq!(api.code, "OAUTH_025");
    assert_eq!(api.message, "Token invalid");
    assert!(err.to_string().starts_with("get task: clickup api error (status 401)"));
}

#[tokio::test]
async fn test_status_kinds_without_envelope() {
    let server = MockServer::start().await;
    for (status, id) in [(403u16, "a"), (404, "b"), (429, "c"), (502, "d"), (400, "e")] {
        Mock::given(method("DELETE"))
            .and(path(format!("/v2/task/{}", id)))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
            .mount(&server)
            .await;
    }

    let client = common::client(&server);
    let kinds = [
        ("a", ErrorKind::Forbidden),
        ("b", ErrorKind::NotFound),
        ("c", ErrorKind::RateLimited),
        ("d", ErrorKind::ServerError),
        ("e", ErrorKind::Request),
    ];
    for (id, expected) in kinds {
        let err = client.tasks().delete(id).await.unwrap_err();
        assert_eq!(err.kind(), expected, "task {}", id);
        let api = err.api_error().unwrap();
        assert_eq!(api.code, "");
        assert_eq!(api.body, "upstream says no");
    }
}

#[tokio::test]
async fn test_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/space/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = common::client(&server).spaces().get("s1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.op(), Some("get space"));
}

#[tokio::test]
async fn test_discarded_body_is_not_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/folder/f1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&server)
        .await;

    common::client(&server).folders().delete("f1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("content-type"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_null_body_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/team/1/time_entries/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "77"}})))
        .mount(&server)
        .await;

    let client = common::client(&server);
    let req = Request::post("/v2/team/1/time_entries/stop")
        .with_json(&Value::Null)
        .unwrap();
    let _: Value = client.execute(req).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("content-type"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_invalid_paths_are_rejected_locally() {
    let server = MockServer::start().await;
    let client = common::client(&server);

    for bad in ["v2/team", "http://elsewhere/v2/team", "/v2/team?archived=true"] {
        let err = client.execute_discard(Request::get(bad)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn test_path_arguments_are_escaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/task/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a/b", "name": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    let task = common::client(&server)
        .tasks()
        .get("a/b", &Default::default())
        .await
        .unwrap();
    assert_eq!(task.id, "a/b");
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/team"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"teams": []}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let client = common::client(&server).with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = std::time::Instant::now();
    let err = client.workspaces().list().await.unwrap_err();
    canceller.await.unwrap();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(matches!(err.root(), ClickUpError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_already_cancelled_token_issues_no_request() {
    let server = MockServer::start().await;
    let token = CancellationToken::new();
    token.cancel();

    let err = common::client(&server)
        .with_cancellation(token)
        .workspaces()
        .list()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn test_network_failure_is_tagged() {
    // Porta reservada e liberada: ninguém escutando
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = clickup::ClickUpClient::builder(common::TOKEN)
        .base_url(format!("http://{}", addr))
        .build()
        .unwrap();

    let err = client.workspaces().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("list workspaces: http request failed"));
}
