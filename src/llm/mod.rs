//! Language-model collaborator for the chat gate.
//!
//! - [`ChatClient`]: async trait the gate dispatches to.
//! - [`DeepSeekClient`]: OpenAI-compatible `/chat/completions` adapter.
//! - [`ConversationMemory`]: bounded per-session history sent with each call.
//! - [`MockChatClient`]: scripted client for tests.

pub mod client;
pub mod deepseek;
pub mod memory;
pub mod prompt;

pub use client::{ChatClient, MockChatClient};
pub use deepseek::DeepSeekClient;
pub use memory::{ChatMessage, ConversationMemory, Role};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Language model request timed out after {0}s")]
    Timeout(u64),

    #[error("Language model returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse language model response: {0}")]
    Parse(String),
}
