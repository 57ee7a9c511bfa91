use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// JSON body extractor that answers with the API's own error shape.
///
/// Behaves like a lenient form parser rather than `axum::Json`:
/// - a request whose `Content-Type` is not `application/json` is read as
///   an empty object, as is an empty body
/// - an object fills `T` by field name
/// - an array supplies no fields and yields `T::default()`
/// - anything else, including bare scalars, is `400 Invalid JSON body`
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            tracing::debug!("Ignoring request body without a JSON content type");
            return Ok(JsonBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!("Failed to read request body: {}", err);
            ApiError::InvalidBody
        })?;

        if bytes.is_empty() {
            return Ok(JsonBody(T::default()));
        }

        let value: JsonValue = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!("Rejected request body: {}", err);
            ApiError::InvalidBody
        })?;

        match value {
            JsonValue::Object(_) => serde_json::from_value(value).map(JsonBody).map_err(|err| {
                tracing::debug!("Rejected request body: {}", err);
                ApiError::InvalidBody
            }),
            JsonValue::Array(_) => Ok(JsonBody(T::default())),
            other => {
                tracing::debug!("Rejected non-object request body: {}", other);
                Err(ApiError::InvalidBody)
            }
        }
    }
}

/// The `{userId}` path segment, rejected as a JSON `400` when it does not
/// decode to UTF-8.
#[derive(Debug)]
pub struct UserIdPath(pub String);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(user_id)| UserIdPath(user_id))
            .map_err(|err| {
                tracing::debug!("Rejected userId path parameter: {}", err);
                ApiError::InvalidPath
            })
    }
}
