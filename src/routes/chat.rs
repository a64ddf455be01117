use axum::{
    Extension, Json,
    extract::{OriginalUri, State, rejection::JsonRejection},
    http::{Method, StatusCode},
};
use serde_json::{Value, json};
use tracing::error;

use crate::{
    error::ApiError,
    message::{ChatRequest, ChatResponse, MAX_MESSAGE_CHARS},
    request_id::RequestId,
    services::provider::ChatMessage,
    state::SharedState,
};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const CHAT_TEMPERATURE: f32 = 0.2;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        // Over-cap bodies get a stable message instead of the extractor's
        // buffer-internals wording.
        let message = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            "Message is too large".to_string()
        } else {
            rejection.body_text()
        };
        ApiError::bad_request(&request_id, message)
    })?;

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ApiError::bad_request(&request_id, "Message is required"));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::bad_request(&request_id, "Message is too long"));
    }

    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(message),
    ];

    let answer = state
        .provider
        .complete(&state.config.model, &messages, CHAT_TEMPERATURE)
        .await
        .map_err(|err| {
            error!("chat completion failed (request {}): {}", request_id, err);
            ApiError::internal(&request_id, err.to_string())
        })?;

    Ok(Json(ChatResponse {
        request_id: request_id.0,
        answer,
    }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

// Catches every unmatched route, API and static alike. OriginalUri keeps
// the full path even when the fallback runs inside the nested API router.
pub async fn not_found_handler(
    Extension(request_id): Extension<RequestId>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> ApiError {
    ApiError::not_found(
        &request_id,
        format!("Not found: {} {}", method, uri.path()),
    )
}
