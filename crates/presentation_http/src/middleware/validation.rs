//! Request validation
//!
//! Provides a `ValidatedJson` extractor that validates request bodies using the validator crate.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::ApiError;

/// A JSON extractor that also validates the request body
///
/// Malformed JSON and failed validation both reject with
/// `ApiError::BadRequest`; bodies over the size limit with
/// `ApiError::PayloadTooLarge`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge(e.body_text())
                } else {
                    ApiError::BadRequest(e.body_text())
                }
            })?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(describe(&e, "")))?;

        Ok(Self(value))
    }
}

/// Flatten validation errors into `field: message` pairs, nested fields dotted
fn describe(errors: &ValidationErrors, prefix: &str) -> String {
    let mut parts = Vec::new();
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                parts.extend(list.iter().map(|error| {
                    format!(
                        "{path}: {}",
                        error
                            .message
                            .as_ref()
                            .map_or_else(|| error.code.to_string(), ToString::to_string)
                    )
                }));
            },
            ValidationErrorsKind::Struct(inner) => parts.push(describe(inner, &path)),
            ValidationErrorsKind::List(items) => {
                parts.extend(
                    items
                        .iter()
                        .map(|(index, inner)| describe(inner, &format!("{path}[{index}]"))),
                );
            },
        }
    }
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, extract::DefaultBodyLimit, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(url(message = "must be a URL"))]
        url: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
        message: String,
        #[serde(default)]
        #[validate(nested)]
        inner: Option<Inner>,
    }

    async fn test_handler(ValidatedJson(req): ValidatedJson<TestRequest>) -> String {
        req.message
    }

    fn create_test_app() -> Router {
        Router::new().route("/test", post(test_handler))
    }

    async fn call(body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = create_test_app()
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/test")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn valid_request_passes() {
        let (status, _) = call(r#"{"message": "hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_message_rejected() {
        let (status, body) = call(r#"{"message": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], true);
        assert_eq!(
            body["message"],
            "message: must be between 1 and 100 characters"
        );
    }

    #[tokio::test]
    async fn nested_errors_are_dotted() {
        let (status, body) = call(r#"{"message": "hi", "inner": {"url": "nope"}}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "inner.url: must be a URL");
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let app = create_test_app().layer(DefaultBodyLimit::max(16));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/test")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "well over sixteen bytes"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn malformed_json_rejected() {
        let (status, body) = call("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], true);
    }
}
