// src/assistant/session.rs
// View-local chat history for one widget session

use serde::{Deserialize, Serialize};

use super::responder::{GREETING, Reply, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// A reply computed at submit time and shown once the caller's delay elapses.
/// Dropping it without `deliver` discards the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingReply {
    pub kind: Reply,
    pub text: &'static str,
}

/// Append-only message sequence owned by one view.
///
/// Nothing is persisted; dropping the session discards it.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            typing: false,
        }
    }

    /// Record a user message and compute its reply.
    ///
    /// Returns `None` for blank input or while a reply is still pending.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() || self.typing {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        self.typing = true;

        let kind = classify(text);
        Some(PendingReply {
            kind,
            text: kind.text(),
        })
    }

    /// Show a pending reply and leave the typing state
    pub fn deliver(&mut self, pending: PendingReply) {
        self.messages.push(ChatMessage::assistant(pending.text));
        self.typing = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }
}
