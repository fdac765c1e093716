//! Per-request gate: validate → input domain → dispatch → output domain.
//!
//! Every path ends in exactly one [`GateOutcome`]. Only a failed model
//! call escapes as an error. Only completed exchanges enter session history.

use std::sync::Arc;

use super::classify::DomainClassifier;
use super::types::{ChatType, GateOutcome, Rejection};
use super::validate::{validate, ValidationRule};
use super::GateError;
use crate::llm::ChatClient;

pub const EMPTY_RESPONSE_MESSAGE: &str =
    "⚠️ I couldn't generate a response. Please try again with more details.";

const EXPLORE_INPUT_MESSAGE: &str = "🩺 Please ask a health-related question";
const SYMPTOM_INPUT_MESSAGE: &str = "🤒 Please describe your symptoms in more detail. \
Examples: 'headache and fever', 'dizziness after standing up'";
const FOOD_INPUT_MESSAGE: &str = "🍏 Please ask about food or nutrition";

const EXPLORE_OUTPUT_MESSAGE: &str =
    "⚠️ I only provide medical information. Please rephrase your question.";
const SYMPTOM_OUTPUT_MESSAGE: &str =
    "⚠️ I only provide health information. Please ask about symptoms.";
const FOOD_OUTPUT_MESSAGE: &str =
    "⚠️ I only provide food and nutrition information. Please ask about food items.";

/// Stateless between requests; share one instance across handlers.
pub struct ChatGate {
    client: Arc<dyn ChatClient>,
    classifier: &'static DomainClassifier,
}

impl ChatGate {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            classifier: DomainClassifier::global(),
        }
    }

    /// Run one chat exchange through the gate.
    ///
    /// Rejections are `Ok`: the message is a normal answer for the user.
    /// `Err` means the model could not be reached.
    pub async fn process(
        &self,
        session_id: &str,
        prompt: &str,
        chat_type: ChatType,
    ) -> Result<GateOutcome, GateError> {
        let prompt = prompt.trim();

        let rule = ValidationRule::for_chat_type(chat_type);
        if !validate(prompt, rule) {
            return Ok(self.reject(session_id, chat_type, Rejection::Structural, rule.message));
        }

        if let Some(message) = self.check_input(prompt, chat_type) {
            return Ok(self.reject(session_id, chat_type, Rejection::InputDomain, message));
        }

        tracing::info!(session_id, chat_type = %chat_type, "Dispatching chat prompt");

        let reply = self
            .client
            .get_response(session_id, prompt, chat_type)
            .await
            .map_err(|e| {
                tracing::error!(session_id, chat_type = %chat_type, error = %e, "Language model call failed");
                GateError::Dispatch(e)
            })?;

        if reply.trim().is_empty() {
            return Ok(self.reject(
                session_id,
                chat_type,
                Rejection::EmptyResponse,
                EMPTY_RESPONSE_MESSAGE,
            ));
        }

        if let Some(message) = self.check_output(&reply, chat_type) {
            return Ok(self.reject(session_id, chat_type, Rejection::OutputDomain, message));
        }

        self.client.remember(session_id, prompt, &reply);

        tracing::info!(
            session_id,
            chat_type = %chat_type,
            reply_chars = reply.chars().count(),
            "Chat exchange completed"
        );
        Ok(GateOutcome::Completed { reply })
    }

    /// Rejection message if the prompt is outside the chat type's domain.
    fn check_input(&self, prompt: &str, chat_type: ChatType) -> Option<&'static str> {
        let c = self.classifier;
        match chat_type {
            ChatType::Explore if !c.is_medical_domain(prompt) => Some(EXPLORE_INPUT_MESSAGE),
            ChatType::Symptom if !c.is_symptom_domain(prompt) => Some(SYMPTOM_INPUT_MESSAGE),
            ChatType::Food if !c.is_food_domain(prompt) => Some(FOOD_INPUT_MESSAGE),
            _ => None,
        }
    }

    /// Rejection message if the reply drifted out of domain.
    fn check_output(&self, reply: &str, chat_type: ChatType) -> Option<&'static str> {
        let c = self.classifier;
        match chat_type {
            ChatType::Explore if !c.is_medical_domain(reply) => Some(EXPLORE_OUTPUT_MESSAGE),
            ChatType::Symptom
                if !(c.is_symptom_domain(reply) || c.has_advisory_keyword(reply)) =>
            {
                Some(SYMPTOM_OUTPUT_MESSAGE)
            }
            ChatType::Food if !(c.is_food_domain(reply) || c.has_nutrition_keyword(reply)) => {
                Some(FOOD_OUTPUT_MESSAGE)
            }
            _ => None,
        }
    }

    fn reject(
        &self,
        session_id: &str,
        chat_type: ChatType,
        reason: Rejection,
        message: &str,
    ) -> GateOutcome {
        tracing::warn!(session_id, chat_type = %chat_type, reason = ?reason, "Chat prompt rejected");
        GateOutcome::rejected(reason, message)
    }
}
