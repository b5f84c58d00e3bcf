//! Lenient JSON body extractor.

use crate::errors::{AppError, messages};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};

/// Request body as raw JSON, left untyped so validation can inspect it.
///
/// - A JSON content type with an unparseable body is rejected with
///   400 `{"error": "JSON no valido"}`.
/// - A body over the request body limit is rejected with 413.
/// - A missing body, or a body sent with any other content type, yields an
///   empty object so that every field reads as absent.
///
/// ```ignore
/// async fn create(JsonBody(body): JsonBody) -> Result<Response, AppError> {
///     CREATE_RULES.validate(&RequestInput::new().with_body(body)).check()?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e.body_text());
            match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => {
                    AppError::PayloadTooLarge(messages::PAYLOAD_TOO_LARGE.to_string())
                }
                _ => AppError::BadRequest(messages::INVALID_BODY.to_string()),
            }
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest(messages::INVALID_JSON.to_string())
        })
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http};
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Value, AppError> {
        let mut builder = http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonBody::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn test_parses_json_object() {
        let value = extract(Some("application/json"), r#"{"name":"Monitor"}"#)
            .await
            .unwrap();
        assert_eq!(value, json!({"name": "Monitor"}));
    }

    #[tokio::test]
    async fn test_charset_parameter_is_accepted() {
        let value = extract(Some("application/json; charset=utf-8"), r#"{"price":1}"#)
            .await
            .unwrap();
        assert_eq!(value["price"], 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, messages::INVALID_JSON),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_body_over_limit_is_payload_too_large() {
        let oversized = vec![b' '; 2 * 1024 * 1024 + 1];
        let req = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(oversized))
            .unwrap();

        let err = JsonBody::from_request(req, &()).await.unwrap_err();
        match err {
            AppError::PayloadTooLarge(msg) => assert_eq!(msg, messages::PAYLOAD_TOO_LARGE),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_object() {
        let value = extract(Some("application/json"), "").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_other_content_type_is_empty_object() {
        let value = extract(Some("text/plain"), r#"{"name":"Monitor"}"#)
            .await
            .unwrap();
        assert_eq!(value, json!({}));

        let value = extract(None, "{broken").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
    }
}
