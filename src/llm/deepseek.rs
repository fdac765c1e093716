//! DeepSeek (OpenAI-compatible) chat-completions adapter.
//!
//! Works with any provider speaking the `/chat/completions` wire format.
//! All connection details come from [`LlmConfig`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::ChatClient;
use super::memory::{ChatMessage, ConversationMemory, Role};
use super::prompt::system_prompt;
use super::LlmError;
use crate::config::LlmConfig;
use crate::gate::ChatType;

pub struct DeepSeekClient {
    client: reqwest::Client,
    config: LlmConfig,
    memory: ConversationMemory,
}

/// Request body for `/chat/completions`.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl DeepSeekClient {
    pub fn new(config: LlmConfig, memory: ConversationMemory) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        Ok(Self {
            client,
            config: LlmConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
            memory,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::new(config.clone(), ConversationMemory::default())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    fn build_messages(&self, session_id: &str, user_input: &str, chat_type: ChatType) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::new(Role::System, system_prompt(chat_type))];
        messages.extend(self.memory.history(session_id));
        messages.push(ChatMessage::new(Role::User, user_input));
        messages
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.config.timeout_secs)
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl ChatClient for DeepSeekClient {
    async fn get_response(
        &self,
        session_id: &str,
        user_input: &str,
        chat_type: ChatType,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let messages = self.build_messages(session_id, user_input, chat_type);
        let body = CompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.temperature,
            stream: false,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Parse("response has no choices".into()))?
            .message
            .content
            .unwrap_or_default();

        tracing::debug!(
            session_id,
            chat_type = %chat_type,
            reply_chars = reply.chars().count(),
            "Language model replied"
        );

        Ok(reply)
    }

    fn remember(&self, session_id: &str, user_input: &str, reply: &str) {
        if !reply.trim().is_empty() {
            self.memory.record(session_id, user_input, reply);
        }
    }
}
