//! HTTP surface.
//!
//! Thin façade over the chat gate and the prediction relay. Routes are
//! flat (`/chat`, `/health`, `/{measure}/predict`); all state lives in
//! [`ApiContext`].

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::build_router;
pub use server::{start_server_on, ApiServer, ServerSession};
pub use types::ApiContext;
