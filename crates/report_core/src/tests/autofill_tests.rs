use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use super::*;

fn client_with_key(base_url: String) -> AutofillClient {
    let settings = Settings {
        gemini_api_key: Some("test-key".to_string()),
        gemini_model: "gemini-test".to_string(),
    };
    AutofillClient::new(&settings).with_base_url(base_url)
}

/// Serves the router on an ephemeral local port and returns its base URL.
/// The generateContent path segment contains a colon, so the mock answers
/// every route rather than pattern-matching it.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

fn gemini_envelope(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn missing_credential_is_reported_without_any_request() {
    let settings = Settings {
        gemini_api_key: None,
        gemini_model: "gemini-test".to_string(),
    };
    // Unroutable base URL: if the client tried the network this would
    // surface as an Http error instead.
    let client = AutofillClient::new(&settings).with_base_url("http://127.0.0.1:9");

    let err = client
        .draft_from_description("mô tả vụ việc")
        .await
        .expect_err("no credential");
    assert!(matches!(err, AutofillError::MissingApiKey));
}

#[tokio::test]
async fn parses_a_schema_conforming_response() {
    let payload = r#"{"caseName":"Vụ án A","fileCode":"HS-1","legalAidProvider":"Nguyễn Văn X","successCriterion":"Thành công","notes":"diễn biến chính"}"#;
    let router = Router::new().fallback(move || async move { Json(gemini_envelope(payload)) });
    let base_url = serve(router).await;

    let fields = client_with_key(base_url)
        .draft_from_description("mô tả vụ việc")
        .await
        .expect("autofill");
    assert_eq!(fields.case_name, "Vụ án A");
    assert_eq!(fields.file_code, "HS-1");
    assert_eq!(fields.legal_aid_provider, "Nguyễn Văn X");
    assert_eq!(fields.success_criterion, "Thành công");
    assert_eq!(fields.notes.as_deref(), Some("diễn biến chính"));
}

#[tokio::test]
async fn omitted_notes_come_back_absent() {
    let payload = r#"{"caseName":"A","fileCode":"B","legalAidProvider":"C","successCriterion":"D"}"#;
    let router = Router::new().fallback(move || async move { Json(gemini_envelope(payload)) });
    let base_url = serve(router).await;

    let fields = client_with_key(base_url)
        .draft_from_description("mô tả")
        .await
        .expect("autofill");
    assert_eq!(fields.notes, None);
}

#[tokio::test]
async fn tolerates_a_markdown_fenced_payload() {
    let payload =
        "```json\n{\"caseName\":\"A\",\"fileCode\":\"B\",\"legalAidProvider\":\"C\",\"successCriterion\":\"D\"}\n```";
    let router = Router::new().fallback(move || async move { Json(gemini_envelope(payload)) });
    let base_url = serve(router).await;

    let fields = client_with_key(base_url)
        .draft_from_description("mô tả")
        .await
        .expect("autofill");
    assert_eq!(fields.case_name, "A");
    assert_eq!(fields.success_criterion, "D");
}

#[tokio::test]
async fn service_error_status_is_surfaced_as_api_error() {
    let router = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "quota exceeded").into_response()
    });
    let base_url = serve(router).await;

    let err = client_with_key(base_url)
        .draft_from_description("mô tả")
        .await
        .expect_err("server error");
    match err {
        AutofillError::Api(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_payload_is_an_invalid_response() {
    let router =
        Router::new().fallback(|| async { Json(gemini_envelope("this is not json at all")) });
    let base_url = serve(router).await;

    let err = client_with_key(base_url)
        .draft_from_description("mô tả")
        .await
        .expect_err("bad payload");
    assert!(matches!(err, AutofillError::InvalidResponse(_)));
}

#[tokio::test]
async fn response_without_candidates_is_an_invalid_response() {
    let router = Router::new().fallback(|| async { Json(json!({ "candidates": [] })) });
    let base_url = serve(router).await;

    let err = client_with_key(base_url)
        .draft_from_description("mô tả")
        .await
        .expect_err("empty candidates");
    match err {
        AutofillError::InvalidResponse(message) => {
            assert!(message.contains("no candidates"));
        }
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}
