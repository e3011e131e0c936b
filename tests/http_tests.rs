//! HTTP service tests against a local mock server

mod common;

use clarity360::api::{FeedbackService, HttpFeedbackService};
use clarity360::config::ClientConfig;
use clarity360::error::Error;
use clarity360::form::{NoopNotifier, SubmissionForm};
use clarity360::list::{ListState, SubmissionsList};
use clarity360::types::{FeedbackId, StatusChoice};
use common::fixtures::{make_attachment, make_valid_draft};
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::TempDir;

fn service_for(server: &Server) -> HttpFeedbackService {
    HttpFeedbackService::new(ClientConfig::new(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_submit_posts_multipart_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/feedback")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="concernType"\r\n\r\nHealth & Safety Issue\r\n"#.to_string()),
            Matcher::Regex(r#"name="department"\r\n\r\nOperations\r\n"#.to_string()),
            Matcher::Regex(r#"name="description"\r\n\r\nForklift charging area"#.to_string()),
            Matcher::Regex(r#"name="isAnonymous"\r\n\r\ntrue\r\n"#.to_string()),
            Matcher::Regex(r#"name="attachments"; filename="first\.txt""#.to_string()),
            Matcher::Regex(r#"name="attachments"; filename="second\.txt""#.to_string()),
            Matcher::Regex("first file body".to_string()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 77, "status": "pending"}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let mut draft = make_valid_draft();
    draft.add_attachments([
        make_attachment(&dir, "first.txt", b"first file body"),
        make_attachment(&dir, "second.txt", b"second file body"),
    ]);
    let mut form = SubmissionForm::with_draft(draft);

    let receipt = form
        .submit(&service_for(&server), &NoopNotifier)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.status, 201);
    assert_eq!(receipt.record_id(), Some(FeedbackId::Number(77)));
    assert!(form.draft.description.is_empty());
}

#[tokio::test]
async fn test_submit_success_without_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/feedback")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let mut form = SubmissionForm::with_draft(make_valid_draft());
    let receipt = form
        .submit(&service_for(&server), &NoopNotifier)
        .await
        .unwrap();

    assert_eq!(receipt.body, None);
    assert!(form.draft.description.is_empty());
}

#[tokio::test]
async fn test_submit_server_error_keeps_draft() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/feedback")
        .with_status(500)
        .with_body("database unavailable")
        .create_async()
        .await;

    let draft = make_valid_draft();
    let mut form = SubmissionForm::with_draft(draft.clone());
    let err = form
        .submit(&service_for(&server), &NoopNotifier)
        .await
        .unwrap_err();

    match err {
        Error::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert_eq!(form.draft, draft);
}

#[tokio::test]
async fn test_submit_connection_failure_is_transport_error() {
    let service =
        HttpFeedbackService::new(ClientConfig::new("http://127.0.0.1:9").unwrap()).unwrap();
    let mut form = SubmissionForm::with_draft(make_valid_draft());

    let err = form.submit(&service, &NoopNotifier).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(!form.draft.description.is_empty());
}

#[tokio::test]
async fn test_list_bare_array() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/feedback")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"status":"pending","urgency":"Low","description":"Chair broken"}]"#)
        .create_async()
        .await;

    let records = service_for(&server).list_feedback().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, FeedbackId::Number(1));
    assert_eq!(records[0].status_str(), "pending");
    assert_eq!(records[0].urgency_str(), "Low");
}

#[tokio::test]
async fn test_list_wrapper_matches_bare_array() {
    let items = json!([
        {"id": 1, "status": "pending", "urgency": "Low"},
        {"id": 2, "status": "closed", "urgency": "critical"}
    ]);

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/feedback")
        .with_status(200)
        .with_body(json!({ "data": items }).to_string())
        .create_async()
        .await;
    let wrapped = service_for(&server).list_feedback().await.unwrap();

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/feedback")
        .with_status(200)
        .with_body(items.to_string())
        .create_async()
        .await;
    let bare = service_for(&server).list_feedback().await.unwrap();

    assert_eq!(wrapped, bare);
    assert_eq!(bare.len(), 2);
}

#[tokio::test]
async fn test_list_empty_array_is_empty_state() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/feedback")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut list = SubmissionsList::new();
    assert_eq!(list.refresh(&service_for(&server)).await, &ListState::Empty);
}

#[tokio::test]
async fn test_list_server_error_is_failed_state() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/feedback")
        .with_status(502)
        .create_async()
        .await;

    let mut list = SubmissionsList::new();
    assert!(matches!(
        list.refresh(&service_for(&server)).await,
        ListState::Failed(_)
    ));
}

#[tokio::test]
async fn test_update_status_sends_patch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/feedback/5")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "status": "In Progress" })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    service_for(&server)
        .update_status(&FeedbackId::Number(5), StatusChoice::InProgress)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_status_encodes_text_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/feedback/a%20b")
        .with_status(200)
        .create_async()
        .await;

    service_for(&server)
        .update_status(&FeedbackId::Text("a b".to_string()), StatusChoice::Closed)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_change_status_round_trip() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/feedback")
        .with_status(200)
        .with_body(
            json!([
                {"id": 4, "status": "pending", "urgency": "Low"},
                {"id": 5, "status": "pending", "urgency": "high"}
            ])
            .to_string(),
        )
        .create_async()
        .await;
    let _patch = server
        .mock("PATCH", "/api/feedback/5")
        .with_status(404)
        .create_async()
        .await;

    let service = service_for(&server);
    let mut list = SubmissionsList::new();
    list.refresh(&service).await;
    let before = list.records().to_vec();

    let err = list
        .change_status(&service, &FeedbackId::Number(5), StatusChoice::Resolved)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Server { status: 404, .. }));
    assert_eq!(list.records(), before.as_slice());
}
