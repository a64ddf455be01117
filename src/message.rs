// src/message.rs
use serde::{Deserialize, Serialize};

/// Longest accepted message, in characters after trimming.
pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub answer: String,
}
