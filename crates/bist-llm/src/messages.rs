//! Message types for LLM communication
//!
//! Messages follow the content/parts layout used by Gemini: a role plus an
//! ordered list of text parts.

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message
    User,
    /// Model (assistant) message
    Model,
}

/// A single part of message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text content
    pub text: String,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Message content parts
    pub parts: Vec<Part>,
}

impl Message {
    /// Create a user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a model message with text
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts, or `None` if there is no text at all
    pub fn text(&self) -> Option<String> {
        let text: String = self.parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
