//! Bounded in-memory conversation history, keyed by session id.
//!
//! Each session keeps its most recent exchanges only. When the number of
//! sessions exceeds the cap, the least recently used session is dropped.
//! Nothing is persisted; a restart forgets every conversation.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use serde::Serialize;

pub const DEFAULT_TURNS_PER_SESSION: usize = 10;
pub const DEFAULT_MAX_SESSIONS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in OpenAI chat format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

struct SessionHistory {
    /// user/assistant pairs, oldest first.
    turns: VecDeque<(String, String)>,
    last_used: Instant,
}

pub struct ConversationMemory {
    turns_per_session: usize,
    max_sessions: usize,
    sessions: Mutex<HashMap<String, SessionHistory>>,
}

impl ConversationMemory {
    pub fn new(turns_per_session: usize, max_sessions: usize) -> Self {
        Self {
            turns_per_session,
            max_sessions,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Previous exchanges of a session, flattened to chat messages.
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        let sessions = self.lock();
        sessions
            .get(session_id)
            .map(|h| {
                h.turns
                    .iter()
                    .flat_map(|(user, assistant)| {
                        [
                            ChatMessage::new(Role::User, user.as_str()),
                            ChatMessage::new(Role::Assistant, assistant.as_str()),
                        ]
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append an exchange, trimming the session and evicting idle sessions.
    pub fn record(&self, session_id: &str, user: &str, assistant: &str) {
        if self.turns_per_session == 0 {
            return;
        }
        let mut sessions = self.lock();

        if !sessions.contains_key(session_id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, h)| h.last_used)
                .map(|(id, _)| id.clone());
            if let Some(id) = oldest {
                sessions.remove(&id);
                tracing::debug!(session_id = %id, "Evicted idle conversation");
            }
        }

        let history = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionHistory {
                turns: VecDeque::new(),
                last_used: Instant::now(),
            });
        history.turns.push_back((user.to_string(), assistant.to_string()));
        while history.turns.len() > self.turns_per_session {
            history.turns.pop_front();
        }
        history.last_used = Instant::now();
    }

    pub fn forget(&self, session_id: &str) {
        self.lock().remove(session_id);
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    // History is advisory context: a poisoned lock still holds usable data.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionHistory>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Conversation memory lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(DEFAULT_TURNS_PER_SESSION, DEFAULT_MAX_SESSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_has_no_history() {
        let memory = ConversationMemory::default();
        assert!(memory.history("nobody").is_empty());
    }

    #[test]
    fn history_alternates_user_and_assistant() {
        let memory = ConversationMemory::default();
        memory.record("s1", "hello", "hi there");
        memory.record("s1", "how are you", "fine");

        let history = memory.history("s1");
        assert_eq!(history.len(), 4);
        assert_eq!(history[0], ChatMessage::new(Role::User, "hello"));
        assert_eq!(history[1], ChatMessage::new(Role::Assistant, "hi there"));
        assert_eq!(history[3].content, "fine");
    }

    #[test]
    fn sessions_are_isolated() {
        let memory = ConversationMemory::default();
        memory.record("a", "q-a", "r-a");
        memory.record("b", "q-b", "r-b");
        assert_eq!(memory.history("a")[0].content, "q-a");
        assert_eq!(memory.history("b")[0].content, "q-b");
    }

    #[test]
    fn keeps_only_recent_turns() {
        let memory = ConversationMemory::new(2, 10);
        for i in 0..5 {
            memory.record("s1", &format!("q{i}"), &format!("r{i}"));
        }
        let history = memory.history("s1");
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].content, "q3");
        assert_eq!(history[3].content, "r4");
    }

    #[test]
    fn evicts_least_recently_used_session() {
        let memory = ConversationMemory::new(5, 2);
        memory.record("first", "q", "r");
        std::thread::sleep(std::time::Duration::from_millis(2));
        memory.record("second", "q", "r");
        std::thread::sleep(std::time::Duration::from_millis(2));
        memory.record("third", "q", "r");

        assert_eq!(memory.session_count(), 2);
        assert!(memory.history("first").is_empty());
        assert!(!memory.history("third").is_empty());
    }

    #[test]
    fn zero_turns_disables_memory() {
        let memory = ConversationMemory::new(0, 10);
        memory.record("s1", "q", "r");
        assert_eq!(memory.session_count(), 0);
    }

    #[test]
    fn forget_drops_session() {
        let memory = ConversationMemory::default();
        memory.record("s1", "q", "r");
        memory.forget("s1");
        assert!(memory.history("s1").is_empty());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::new(Role::Assistant, "x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }
}
