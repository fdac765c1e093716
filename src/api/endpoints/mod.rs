//! API endpoint handlers, one module per feature.

pub mod chat;
pub mod health;
pub mod prediction;
