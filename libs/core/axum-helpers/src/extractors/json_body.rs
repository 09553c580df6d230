//! JSON body extractor with structured error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};

/// Extractor for raw JSON request bodies.
///
/// Unlike `axum::Json`, rejections are converted into the shared
/// [`ErrorResponse`](crate::errors::ErrorResponse) JSON shape: a missing
/// or non-JSON `Content-Type` yields 415, malformed JSON yields 400.
///
/// Useful for endpoints that validate the payload themselves rather than
/// deserializing directly into a typed struct.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_thing(JsonBody(body): JsonBody) -> String {
///     format!("got: {}", body)
/// }
/// ```
pub struct JsonBody(pub serde_json::Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(value))
    }
}
