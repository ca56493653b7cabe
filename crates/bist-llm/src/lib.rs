//! LLM provider abstraction layer
//!
//! This crate provides provider-agnostic abstractions for asking a hosted
//! Large Language Model for a structured (JSON) answer. It includes:
//!
//! - Message types for LLM communication
//! - Completion request/response types with a declared response [`Schema`]
//! - Server-side tools such as search grounding ([`Tool::GoogleSearch`])
//! - Provider trait for LLM implementations
//! - Concrete provider implementations (behind feature flags)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod schema;
pub mod tools;

// Re-export main types
pub use completion::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, FinishReason, JSON_MIME_TYPE,
    TokenUsage,
};
pub use error::{LLMError, Result};
pub use messages::{Message, Part, Role};
pub use provider::LLMProvider;
pub use schema::{Schema, SchemaType, SchemaViolation};
pub use tools::Tool;

// Provider implementations (feature-gated)
#[cfg(feature = "gemini")]
pub mod providers;
