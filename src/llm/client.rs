use std::sync::Mutex;

use async_trait::async_trait;

use super::LlmError;
use crate::gate::ChatType;

/// Remote language model used by the chat gate.
///
/// Implementors own their timeout and session handling. Blank text is a
/// valid reply; the gate decides what to do with it.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn get_response(
        &self,
        session_id: &str,
        user_input: &str,
        chat_type: ChatType,
    ) -> Result<String, LlmError>;

    /// Keep an accepted exchange as session history. Called by the gate
    /// only for replies the user actually receives.
    fn remember(&self, _session_id: &str, _user_input: &str, _reply: &str) {}
}

/// A recorded dispatch: (session id, prompt, chat type).
pub type RecordedCall = (String, String, ChatType);

/// Mock client for testing: returns a configurable reply or error and
/// records every dispatch.
pub struct MockChatClient {
    reply: Result<String, LlmError>,
    calls: Mutex<Vec<RecordedCall>>,
    remembered: Mutex<Vec<(String, String, String)>>,
}

impl MockChatClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
            remembered: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
            remembered: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }

    /// Exchanges handed back through `remember`: (session id, prompt, reply).
    pub fn remembered(&self) -> Vec<(String, String, String)> {
        self.remembered.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn get_response(
        &self,
        session_id: &str,
        user_input: &str,
        chat_type: ChatType,
    ) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((session_id.to_string(), user_input.to_string(), chat_type));
        }
        self.reply.clone()
    }

    fn remember(&self, session_id: &str, user_input: &str, reply: &str) {
        if let Ok(mut remembered) = self.remembered.lock() {
            remembered.push((session_id.to_string(), user_input.to_string(), reply.to_string()));
        }
    }
}
