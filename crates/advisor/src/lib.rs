//! Advisor
//!
//! Scripted car-buying advice with an optional generative-text backend,
//! ephemeral chat transcripts, market insight templates and the vehicle
//! type catalog.

mod canned;
mod catalog;
mod insights;
mod remote;
mod responder;
mod session;

pub use canned::CannedResponder;
pub use catalog::{car_types, CarType};
pub use insights::market_insights;
pub use remote::{RemoteAdvisor, SYSTEM_CONTEXT};
pub use responder::{Advisor, AdvisorConfig, Reply, ReplySource};
pub use session::{ChatMessage, ChatSession, Role, SessionStore};

use thiserror::Error;

/// Errors from the advice backends
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("HTTP client error: {0}")]
    Client(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}
