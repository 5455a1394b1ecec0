//! OCR adapter tests — wire contract against a mock provider, the four
//! failure kinds, and the no-network short-circuits.

mod common;

use httpmock::prelude::*;
use serde_json::json;

use common::{TEST_API_KEY, mock_vision};
use vanguard::ocr::OcrError;

#[tokio::test]
async fn test_extract_image_success_trims_text() {
    let server = MockServer::start();

    let annotate = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/images:annotate")
            .query_param("key", TEST_API_KEY)
            .body_contains(r#""type":"TEXT_DETECTION""#)
            .body_contains(r#""maxResults":1"#);
        then.status(200).json_body(json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "  Hello World\n" },
                    { "description": "Hello" }
                ]
            }]
        }));
    });

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let result = client
        .extract_image(b"fake image bytes")
        .await
        .expect("extraction failed");

    annotate.assert();
    assert_eq!(result.text, "Hello World");
    assert_eq!(result.confidence, 0.95);
    assert_eq!(result.service, "Google Cloud Vision API");
    assert!(result.processing_time_ms < 60_000);
}

#[tokio::test]
async fn test_extract_image_http_error_maps_to_provider() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(403).json_body(json!({
            "error": { "code": 403, "message": "The request is missing a valid API key." }
        }));
    });

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let err = client
        .extract_image(b"fake image bytes")
        .await
        .expect_err("expected provider error");

    match &err {
        OcrError::Provider(message) => {
            assert!(message.contains("Forbidden"), "message was: {message}");
            assert!(message.contains("missing a valid API key"));
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_image_http_error_without_body_detail() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(500).body("upstream exploded");
    });

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let err = client
        .extract_image(b"fake image bytes")
        .await
        .expect_err("expected provider error");

    match &err {
        OcrError::Provider(message) => {
            assert!(message.contains("Internal Server Error"), "message was: {message}");
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_image_embedded_error_maps_to_provider() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(json!({
            "responses": [{
                "error": { "code": 3, "message": "Bad image data." }
            }]
        }));
    });

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let err = client
        .extract_image(b"fake image bytes")
        .await
        .expect_err("expected provider error");

    match &err {
        OcrError::Provider(message) => assert!(message.contains("Bad image data")),
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_image_no_annotations_is_no_text_detected() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200)
            .json_body(json!({ "responses": [{ "textAnnotations": [] }] }));
    });

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let err = client
        .extract_image(b"fake image bytes")
        .await
        .expect_err("expected no-text error");

    assert!(matches!(err, OcrError::NoTextDetected));
}

#[tokio::test]
async fn test_extract_image_without_credential_issues_no_request() {
    let server = MockServer::start();

    // Catch-all: any request reaching the server is a contract violation
    let any_request = server.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let client = mock_vision(&server, None);

    assert!(!client.is_available());
    let err = client
        .extract_image(b"fake image bytes")
        .await
        .expect_err("expected configuration error");

    assert!(matches!(err, OcrError::Configuration));
    assert_eq!(any_request.hits(), 0);
}

#[tokio::test]
async fn test_extract_file_unreadable_fails_before_network() {
    let server = MockServer::start();

    let any_request = server.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("does-not-exist.png");

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let err = client
        .extract_file(&missing)
        .await
        .expect_err("expected io error");

    assert!(matches!(err, OcrError::Io(_)));
    assert_eq!(any_request.hits(), 0);
}

#[tokio::test]
async fn test_extract_file_reads_and_extracts() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(json!({
            "responses": [{ "textAnnotations": [{ "description": "from disk" }] }]
        }));
    });

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scan.png");
    std::fs::write(&path, b"fake image bytes").expect("Failed to write image");

    let client = mock_vision(&server, Some(TEST_API_KEY));
    let result = client.extract_file(&path).await.expect("extraction failed");

    assert_eq!(result.text, "from disk");
}

#[test]
fn test_is_available_tracks_credential() {
    let server = MockServer::start();

    assert!(mock_vision(&server, Some(TEST_API_KEY)).is_available());
    assert!(!mock_vision(&server, None).is_available());
    // An empty credential counts as unconfigured
    assert!(!mock_vision(&server, Some("")).is_available());
}

#[test]
fn test_service_info_is_static_metadata() {
    let server = MockServer::start();

    let info = mock_vision(&server, Some(TEST_API_KEY)).service_info();
    assert_eq!(info.name, "Google Cloud Vision API");
    assert!(info.is_available);
    assert!(!info.description.is_empty());

    let info = mock_vision(&server, None).service_info();
    assert!(!info.is_available);
}
