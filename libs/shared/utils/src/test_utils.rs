use axum::{
    body::{self, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shared_config::AppConfig;
use shared_database::{AppState, MemoryStore};

pub struct TestConfig {
    pub server_name: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            server_name: "MEDAi Test".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_name: self.server_name.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_state(&self) -> AppState {
        AppState::new(self.to_app_config(), MemoryStore::seeded())
    }
}

pub fn test_state() -> AppState {
    TestConfig::default().to_state()
}

pub struct TestUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("test@example.com", "Test User")
    }
}

impl TestUser {
    pub fn new(email: &str, full_name: &str) -> Self {
        Self {
            email: email.to_string(),
            full_name: full_name.to_string(),
            password: "secret123".to_string(),
        }
    }

    pub fn register_body(&self) -> Value {
        json!({
            "email": self.email,
            "password": self.password,
            "fullName": self.full_name
        })
    }

    pub fn login_body(&self) -> Value {
        json!({
            "email": self.email,
            "password": self.password
        })
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Drives one request through a router and decodes the JSON reply.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let state = TestConfig::default().to_state();
        assert_eq!(state.config.server_name, "MEDAi Test");
        assert_eq!(state.config.port, 3000);
    }

    #[test]
    fn test_user_bodies_use_wire_names() {
        let user = TestUser::new("a@x.com", "A");
        assert_eq!(user.register_body()["fullName"], "A");
        assert_eq!(user.login_body()["email"], "a@x.com");
        assert!(user.login_body().get("fullName").is_none());
    }
}
