use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Client-facing errors produced at the HTTP boundary. The engine itself
/// never fails on well-formed input, so everything here is a 400.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A transaction payload failed the required-field check.
    #[error("Missing required fields")]
    MissingFields,

    /// One or more payloads in a bulk request failed the check.
    #[error("Missing required fields in one or more transactions")]
    MissingFieldsInBatch,

    /// Bulk endpoint received something other than a JSON array.
    #[error("Request body must be an array of transactions")]
    NotAnArray,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
