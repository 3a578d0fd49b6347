use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

/// `Json<T>` whose rejections (bad syntax, wrong content type, wrong shape)
/// come back as a 400 `AppError` instead of axum's plain-text responses.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(AppError::BadRequest(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_json() {
        let ApiJson(probe) = ApiJson::<Probe>::from_request(
            request(Some("application/json"), r#"{"name":"ok"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(probe.name, "ok");
    }

    #[tokio::test]
    async fn syntax_errors_are_bad_requests() {
        let result = ApiJson::<Probe>::from_request(
            request(Some("application/json"), r#"{"name":"#),
            &(),
        )
        .await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn shape_errors_are_bad_requests() {
        let result = ApiJson::<Probe>::from_request(
            request(Some("application/json"), r#"{"name": 5}"#),
            &(),
        )
        .await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn missing_content_type_is_a_bad_request() {
        let result = ApiJson::<Probe>::from_request(request(None, r#"{"name":"ok"}"#), &()).await;
        assert_matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("Content-Type"));
    }
}
