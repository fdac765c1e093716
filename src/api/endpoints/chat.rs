//! `POST /chat`: domain-gated chat.
//!
//! The envelope is checked here; everything about the prompt itself is
//! the gate's business. Gate rejections are ordinary 200 replies.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config::{PROMPT_MAX_CHARS, SESSION_ID_MAX_CHARS};
use crate::gate::ChatType;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub prompt: String,
    /// Kept as text so an unknown value gets the chat-type error message.
    pub chat_type: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatRequest {
    fn check_envelope(&self) -> Result<ChatType, ApiError> {
        check_length("session_id", &self.session_id, SESSION_ID_MAX_CHARS)?;
        check_length("prompt", &self.prompt, PROMPT_MAX_CHARS)?;
        Ok(self.chat_type.parse::<ChatType>()?)
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(ApiError::BadRequest(format!(
            "{field} must be between 1 and {max} characters"
        )));
    }
    Ok(())
}

pub async fn send(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let chat_type = req.check_envelope()?;

    let outcome = ctx.gate.process(&req.session_id, &req.prompt, chat_type).await?;

    Ok(Json(ChatResponse {
        response: outcome.into_response_text(),
    }))
}
