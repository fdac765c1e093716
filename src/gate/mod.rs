//! Chat domain gate.
//!
//! Decides, before and after calling the language model, whether a chat
//! message belongs to the domain its chat type promises. Layers, leaves
//! first: lexicons → compiled matchers → domain classifiers → prompt
//! validator → gate controller.

pub mod lexicon;
pub mod matcher;
pub mod classify;
pub mod validate;
pub mod types;
pub mod controller;

pub use classify::{is_food_domain, is_medical_domain, is_symptom_domain, DomainClassifier};
pub use controller::ChatGate;
pub use lexicon::{get_lexicon, LexiconName};
pub use matcher::Matcher;
pub use types::{ChatType, GateOutcome, GateStage, Rejection};
pub use validate::{validate, ValidationRule};

use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Unknown lexicon: {0}")]
    UnknownLexicon(String),
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Lexicon has no terms")]
    EmptyLexicon,

    #[error("Lexicon contains a blank term")]
    BlankTerm,

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid chat type: {0}. Must be 'symptom', 'qa', 'food', or 'explore'")]
    UnknownChatType(String),

    #[error("Language model dispatch failed: {0}")]
    Dispatch(#[from] LlmError),
}
