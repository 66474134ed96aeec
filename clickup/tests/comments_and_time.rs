mod common;

use clickup::comments::CreateCommentRequest;
use clickup::time_entries::{CreateTimeEntryRequest, StartTimerRequest, TimeEntryFilter};
use clickup::ErrorKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_comment_add_numeric_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/task/t1/comment"))
        .and(body_json(json!({"comment_text": "hello", "notify_all": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 123,
            "hist_id": "26508",
            "date": 1568036964079i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateCommentRequest {
        notify_all: Some(true),
        ..CreateCommentRequest::new("hello")
    };
    let created = common::client(&server)
        .comments()
        .add("t1", &request)
        .await
        .unwrap();

    assert_eq!(created.id.to_string(), "123");
    assert_eq!(created.date, Some(1568036964079));
}

#[tokio::test]
async fn test_comment_list_mixed_id_forms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/task/t1/comment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"comments": [
            {"id": "458", "comment_text": "a", "date": "1568036964079"},
            {"id": 459, "comment_text": "b", "date": 1568036964080i64}
        ]})))
        .mount(&server)
        .await;

    let comments = common::client(&server).comments().list("t1").await.unwrap();
    assert_eq!(comments[0].id.as_str(), "458");
    assert_eq!(comments[1].id.as_str(), "459");
    assert_eq!(comments[0].date, Some(1568036964079));
}

#[tokio::test]
async fn test_reply_without_assignee() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/comment/458/reply"))
        .and(body_json(json!({"comment_text": "ack"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "90"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = common::client(&server)
        .comments()
        .reply("458", &CreateCommentRequest::new("ack"))
        .await
        .unwrap();
    assert_eq!(created.id.as_str(), "90");
}

#[tokio::test]
async fn test_comment_text_required() {
    let server = MockServer::start().await;

    let err = common::client(&server)
        .comments()
        .add("t1", &CreateCommentRequest::new("   "))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TextRequired);
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn test_time_entries_escape_task_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/team/team-1/time_entries"))
        .and(query_param("task_id", "task/with?chars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"id": 1, "duration": "3600000", "start": "1595282645000"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let entries = common::client(&server)
        .time()
        .list("team-1", &TimeEntryFilter::for_task("task/with?chars"))
        .await
        .unwrap();
    assert_eq!(entries[0].id.as_str(), "1");
    assert_eq!(entries[0].duration, Some(3_600_000));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("task_id=task%2Fwith%3Fchars"));
}

#[tokio::test]
async fn test_current_timer_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/team/9001/time_entries/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let current = common::client(&server).time().current("9001").await.unwrap();
    assert!(current.is_none());
}

#[tokio::test]
async fn test_current_timer_running() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/team/9001/time_entries/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {
            "id": "1963465985517105840",
            "start": "1592841559129",
            "duration": "-1592841559129"
        }})))
        .mount(&server)
        .await;

    let current = common::client(&server)
        .time()
        .current("9001")
        .await
        .unwrap()
        .unwrap();
    assert!(current.is_running());
}

#[tokio::test]
async fn test_start_timer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/team/9001/time_entries/start"))
        .and(body_json(json!({"tid": "t1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {
            "id": "55", "start": 1592841559129i64, "duration": -1592841559129i64
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let request = StartTimerRequest {
        tid: Some("t1".to_string()),
        ..Default::default()
    };
    let entry = common::client(&server)
        .time()
        .start("9001", &request)
        .await
        .unwrap();
    assert!(entry.is_running());
}

#[tokio::test]
async fn test_create_time_entry_requires_start() {
    let server = MockServer::start().await;

    let err = common::client(&server)
        .time()
        .create("9001", &CreateTimeEntryRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FieldRequired);
    assert_eq!(err.to_string(), "create time entry: start is required");
    assert_eq!(common::request_count(&server).await, 0);
}
