// src/assistant/mod.rs
// Keyword-driven portfolio assistant (no model, no network)

pub mod responder;
pub mod session;

pub use responder::{Reply, classify, respond};
pub use session::{ChatMessage, ChatSession, PendingReply, Role};
