use assert_matches::assert_matches;
use axum::{extract::State, http::StatusCode};

use auth_cell::handlers::{login, register};
use auth_cell::models::{LoginRequest, RegisterRequest};
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::test_utils::test_state;

fn register_request(email: &str, name: &str) -> RegisterRequest {
    RegisterRequest {
        email: Some(email.to_string()),
        password: Some("pw".to_string()),
        full_name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn test_register_creates_user() {
    let state = test_state();

    let (status, response) = register(State(state.clone()), ApiJson(register_request("a@x.com", "A")))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert!(response.success);
    assert_eq!(response.user.email, "a@x.com");
    assert_eq!(response.user.name, "A");
    assert_eq!(response.message, "Registration successful!");
    assert_eq!(state.store.users_len().await, 1);
}

#[tokio::test]
async fn test_register_without_password_is_accepted() {
    let state = test_state();
    let request = RegisterRequest {
        email: Some("a@x.com".to_string()),
        password: None,
        full_name: Some("A".to_string()),
    };

    let result = register(State(state), ApiJson(request)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_requires_email() {
    let state = test_state();
    let request = RegisterRequest {
        email: None,
        password: Some("pw".to_string()),
        full_name: Some("A".to_string()),
    };

    let result = register(State(state.clone()), ApiJson(request)).await;

    match result.unwrap_err() {
        AppError::ValidationError(msg) => assert_eq!(msg, "Missing required field: email"),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
    assert_eq!(state.store.users_len().await, 0);
}

#[tokio::test]
async fn test_register_requires_full_name() {
    let state = test_state();

    let result = register(State(state), ApiJson(register_request("a@x.com", "  "))).await;

    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("fullName"));
}

#[tokio::test]
async fn test_successive_registrations_get_increasing_ids() {
    let state = test_state();

    let (_, first) = register(State(state.clone()), ApiJson(register_request("a@x.com", "A"))).await.unwrap();
    let (_, second) = register(State(state.clone()), ApiJson(register_request("b@x.com", "B"))).await.unwrap();

    assert!(second.user.id > first.user.id);
}

#[tokio::test]
async fn test_login_after_register() {
    let state = test_state();
    register(State(state.clone()), ApiJson(register_request("a@x.com", "A"))).await.unwrap();

    let response = login(
        State(state),
        ApiJson(LoginRequest {
            email: Some("a@x.com".to_string()),
            password: Some("anything".to_string()),
        }),
    )
    .await
    .unwrap()
    .0;

    assert!(response.success);
    assert_eq!(response.user.name, "A");
    assert_eq!(response.token, format!("demo-token-{}", response.user.id));
    assert_eq!(response.message, "Login successful!");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let state = test_state();

    let result = login(
        State(state),
        ApiJson(LoginRequest {
            email: Some("nobody@x.com".to_string()),
            password: Some("pw".to_string()),
        }),
    )
    .await;

    assert_matches!(result, Err(AppError::Unauthorized(msg)) if msg == "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_email() {
    let state = test_state();

    let result = login(State(state), ApiJson(LoginRequest::default())).await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}
