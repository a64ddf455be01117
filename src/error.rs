// src/error.rs
// Error responses for the HTTP API: one JSON shape, correlation id attached.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::request_id::RequestId;

/// An HTTP-level failure carrying the correlation id of the request it
/// answers. Converts into `{ "requestId": ..., "error": ... }`.
#[derive(Debug)]
pub struct ApiError {
    pub request_id: String,
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(request_id: &RequestId, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, request_id, message)
    }

    pub fn not_found(request_id: &RequestId, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, request_id, message)
    }

    pub fn internal(request_id: &RequestId, message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, request_id, message)
    }

    fn new(status: StatusCode, request_id: &RequestId, message: impl Into<String>) -> Self {
        Self {
            request_id: request_id.0.clone(),
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "requestId": self.request_id,
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid() -> RequestId {
        RequestId("test-id".to_string())
    }

    #[test]
    fn constructors_map_to_statuses() {
        assert_eq!(
            ApiError::bad_request(&rid(), "bad").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found(&rid(), "gone").status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal(&rid(), "boom").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn carries_request_id_and_message() {
        let err = ApiError::bad_request(&rid(), "Message is required");
        assert_eq!(err.request_id, "test-id");
        assert_eq!(err.message, "Message is required");
    }
}
