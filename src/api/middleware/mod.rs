//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. CORS (answers preflight requests)
//! 2. Audit logger

pub mod audit;
