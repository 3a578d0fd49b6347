use axum::http::StatusCode;
use serde_json::json;

use doctor_cell::router::doctor_routes;
use shared_utils::test_utils::{get_request, send, test_state};

#[tokio::test]
async fn test_get_doctors_wire_format() {
    let app = doctor_routes(test_state());

    let (status, body) = send(app, get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["doctors"][1],
        json!({ "id": 2, "name": "Dr. Priya Singh", "specialty": "Neurology", "fee": 400 })
    );
    assert_eq!(body["doctors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_specialties_wire_format() {
    let app = doctor_routes(test_state());

    let (status, body) = send(app, get_request("/specialties")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["specialties"][0],
        json!({ "name": "Cardiology", "icon": "Heart", "conditions": ["chest pain", "high bp"] })
    );
}
