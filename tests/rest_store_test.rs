// ABOUTME: Integration tests for the REST training store against a mock backend
// ABOUTME: Validates routes, auth headers, payloads and HTTP error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_training_sync::config::SyncConfig;
use pierre_training_sync::context::AuthContext;
use pierre_training_sync::errors::ErrorCode;
use pierre_training_sync::models::{Training, TrainingStatus, UpdateTrainingRequest};
use pierre_training_sync::persistence::{RestTrainingStore, TrainingStore};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn training_body(implementations: serde_json::Value) -> serde_json::Value {
    json!({
        "id": 42,
        "user_id": 7,
        "date_time": "2025-03-01T09:30:00Z",
        "status": "in_progress",
        "implementations": implementations,
        "updated_at": "2025-03-01T09:45:00Z"
    })
}

fn store_for(server: &MockServer, auth: AuthContext) -> RestTrainingStore {
    let config = SyncConfig::for_base_url(&server.uri()).unwrap();
    RestTrainingStore::new(&config, auth)
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_decodes_training() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/trainings/42"))
        .and(header("authorization", "Bearer test-token"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(training_body(json!([
            {"exercise_id": 3, "order_index": 1, "sets": [
                {"order_index": 1, "weight": 80.0, "reps": 5, "rpe": 8}
            ]}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server, AuthContext::with_token("test-token"));
    let training = store.get(42).await.unwrap();

    assert_eq!(training.id, 42);
    assert_eq!(training.status, TrainingStatus::InProgress);
    assert_eq!(training.implementations.len(), 1);
    assert_eq!(training.implementations[0].sets[0].rpe, Some(8));
    assert!(training.updated_at.is_some());
}

#[tokio::test]
async fn test_update_puts_partial_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/trainings/42"))
        .and(body_partial_json(json!({
            "status": "in_progress",
            "implementations": [{"exercise_id": 9, "order_index": 1, "sets": []}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(training_body(json!([
            {"exercise_id": 9, "order_index": 1, "sets": []}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let mut training = Training::new(42, 7, chrono::Utc::now());
    training.add_implementation(9);
    let store = store_for(&server, AuthContext::with_token("test-token"));
    let saved = store
        .update(42, &UpdateTrainingRequest::in_progress(&training))
        .await
        .unwrap();

    assert_eq!(saved.implementations[0].exercise_id, 9);

    let received = &server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert!(body.get("date_time").is_some());
    assert!(body.get("duration").is_none());
    assert!(body.get("notes").is_none());
}

#[tokio::test]
async fn test_anonymous_context_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/trainings/42"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&server)
        .await;

    let store = store_for(&server, AuthContext::anonymous());
    let error = store.get(42).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.user_message(), "Could not validate credentials");
    assert!(error.request_id.is_some());

    let received = &server.received_requests().await.unwrap()[0];
    assert!(!received.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_validation_errors_are_formatted() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/trainings/42"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "implementations", 0, "sets", 0, "weight"], "msg": "must be positive"},
                {"loc": ["body", "status"], "msg": "invalid status"}
            ]
        })))
        .mount(&server)
        .await;

    let store = store_for(&server, AuthContext::with_token("test-token"));
    let error = store
        .update(42, &UpdateTrainingRequest::default())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(
        error.user_message(),
        "weight: must be positive; status: invalid status"
    );
}

#[tokio::test]
async fn test_http_status_mapping() {
    let cases: [(u16, ErrorCode); 4] = [
        (403, ErrorCode::PermissionDenied),
        (404, ErrorCode::ResourceNotFound),
        (409, ErrorCode::ResourceLocked),
        (503, ErrorCode::ExternalServiceError),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let store = store_for(&server, AuthContext::with_token("test-token"));
        let error = store.get(42).await.unwrap_err();
        assert_eq!(error.code, expected, "status {status}");
        assert_eq!(
            error.user_message(),
            format!("Request failed with status {status}")
        );
    }
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = store_for(&server, AuthContext::with_token("test-token"));
    let error = store.get(42).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unreachable_backend_is_unavailable() {
    // Port 9 (discard) is not served in test environments
    let config = SyncConfig::for_base_url("http://127.0.0.1:9").unwrap();
    let store = RestTrainingStore::new(&config, AuthContext::anonymous());

    let error = store.get(42).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.code.is_transport());
}
