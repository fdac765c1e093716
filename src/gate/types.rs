use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GateError;

/// Conversational mode of a chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    /// Self-reported symptoms.
    Symptom,
    /// Open medical questions. No domain gate.
    Qa,
    /// Food and nutrition lookups.
    Food,
    /// Open medicine exploration.
    Explore,
}

impl ChatType {
    pub const ALL: [ChatType; 4] = [ChatType::Symptom, ChatType::Qa, ChatType::Food, ChatType::Explore];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Symptom => "symptom",
            ChatType::Qa => "qa",
            ChatType::Food => "food",
            ChatType::Explore => "explore",
        }
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatType {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GateError::UnknownChatType(s.to_string()))
    }
}

/// Where along the gate a request stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStage {
    Received,
    StructurallyValid,
    DomainAccepted,
    Dispatched,
    ResponseDomainChecked,
    Completed,
}

/// Why the gate answered with a steering message instead of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Prompt below the chat type's length or word threshold.
    Structural,
    /// Prompt outside the chat type's domain.
    InputDomain,
    /// The model returned blank text.
    EmptyResponse,
    /// The reply drifted out of domain and no allow-list rescued it.
    OutputDomain,
}

impl Rejection {
    /// The last stage reached before the rejection.
    pub fn stage(&self) -> GateStage {
        match self {
            Rejection::Structural => GateStage::Received,
            Rejection::InputDomain => GateStage::StructurallyValid,
            Rejection::EmptyResponse | Rejection::OutputDomain => GateStage::Dispatched,
        }
    }
}

/// Terminal result of a gated exchange. Both variants are successful
/// responses from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Completed { reply: String },
    Rejected { reason: Rejection, message: String },
}

impl GateOutcome {
    pub(crate) fn rejected(reason: Rejection, message: &str) -> Self {
        GateOutcome::Rejected {
            reason,
            message: message.to_string(),
        }
    }

    /// Text returned to the user.
    pub fn response_text(&self) -> &str {
        match self {
            GateOutcome::Completed { reply } => reply,
            GateOutcome::Rejected { message, .. } => message,
        }
    }

    pub fn into_response_text(self) -> String {
        match self {
            GateOutcome::Completed { reply } => reply,
            GateOutcome::Rejected { message, .. } => message,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            GateOutcome::Completed { .. } => None,
            GateOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }

    pub fn stage(&self) -> GateStage {
        match self {
            GateOutcome::Completed { .. } => GateStage::Completed,
            GateOutcome::Rejected { reason, .. } => reason.stage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_type_parses_wire_names() {
        assert_eq!("symptom".parse::<ChatType>().unwrap(), ChatType::Symptom);
        assert_eq!("qa".parse::<ChatType>().unwrap(), ChatType::Qa);
        assert_eq!("food".parse::<ChatType>().unwrap(), ChatType::Food);
        assert_eq!("explore".parse::<ChatType>().unwrap(), ChatType::Explore);
    }

    #[test]
    fn chat_type_rejects_unknown_and_wrong_case() {
        assert!(matches!("diet".parse::<ChatType>(), Err(GateError::UnknownChatType(_))));
        assert!("Food".parse::<ChatType>().is_err());
    }

    #[test]
    fn chat_type_serde_matches_display() {
        for t in ChatType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{t}\""));
            let back: ChatType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn outcome_text_and_stage() {
        let done = GateOutcome::Completed { reply: "hi".into() };
        assert_eq!(done.response_text(), "hi");
        assert_eq!(done.stage(), GateStage::Completed);
        assert_eq!(done.rejection(), None);

        let rejected = GateOutcome::rejected(Rejection::OutputDomain, "stay on topic");
        assert_eq!(rejected.response_text(), "stay on topic");
        assert_eq!(rejected.stage(), GateStage::Dispatched);
        assert_eq!(rejected.into_response_text(), "stay on topic");
    }
}
