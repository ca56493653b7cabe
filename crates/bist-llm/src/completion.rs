//! Completion request and response types

use crate::{Message, Schema, Tool};
use serde::{Deserialize, Serialize};

/// MIME type asking the model for a bare JSON document
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request for LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (provider-specific)
    pub model: String,

    /// Conversation history
    pub messages: Vec<Message>,

    /// Optional system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature (0.0-2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Server-side tools available to the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,

    /// Output MIME type (e.g. `application/json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// Declared output schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text, if the model produced any
    pub text: Option<String>,

    /// Why the model stopped generating
    pub finish_reason: FinishReason,

    /// Token usage statistics
    pub usage: TokenUsage,
}

/// Reason the LLM stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,

    /// Hit max tokens limit
    MaxTokens,

    /// Blocked by safety filters
    Safety,

    /// Blocked for reciting training data
    Recitation,

    /// Any other reason reported by the provider
    Other,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input tokens
    pub input_tokens: usize,

    /// Number of output tokens
    pub output_tokens: usize,
}

impl CompletionRequest {
    /// Create a builder for completion requests
    pub fn builder(model: impl Into<String>) -> CompletionRequestBuilder {
        CompletionRequestBuilder::new(model)
    }
}

/// Builder for CompletionRequest
pub struct CompletionRequestBuilder {
    request: CompletionRequest,
}

impl CompletionRequestBuilder {
    /// Create a new builder
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            request: CompletionRequest {
                model: model.into(),
                messages: Vec::new(),
                system_instruction: None,
                max_output_tokens: None,
                temperature: None,
                tools: Vec::new(),
                response_mime_type: None,
                response_schema: None,
            },
        }
    }

    /// Add a single message
    pub fn add_message(mut self, message: Message) -> Self {
        self.request.messages.push(message);
        self
    }

    /// Set the system instruction
    pub fn system_instruction(mut self, system: impl Into<String>) -> Self {
        self.request.system_instruction = Some(system.into());
        self
    }

    /// Set the maximum output tokens
    pub fn max_output_tokens(mut self, max_tokens: u32) -> Self {
        self.request.max_output_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.request.temperature = Some(temperature);
        self
    }

    /// Make a tool available to the model
    pub fn tool(mut self, tool: Tool) -> Self {
        self.request.tools.push(tool);
        self
    }

    /// Require a JSON answer conforming to `schema`
    pub fn json_response(mut self, schema: Schema) -> Self {
        self.request.response_mime_type = Some(JSON_MIME_TYPE.to_string());
        self.request.response_schema = Some(schema);
        self
    }

    /// Build the completion request
    pub fn build(self) -> CompletionRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = CompletionRequest::builder("gemini-3-flash-preview")
            .add_message(Message::user("Analyze GARAN"))
            .system_instruction("You are a market analyst")
            .temperature(0.4)
            .tool(Tool::google_search())
            .json_response(Schema::object(vec![("summary", Schema::string())]))
            .build();

        assert_eq!(request.model, "gemini-3-flash-preview");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.4));
        assert_eq!(request.tools, vec![Tool::google_search()]);
        assert_eq!(request.response_mime_type.as_deref(), Some(JSON_MIME_TYPE));
        assert!(request.response_schema.is_some());
        assert_eq!(request.max_output_tokens, None);
    }
}
