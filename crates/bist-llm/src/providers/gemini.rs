//! Google Gemini provider implementation
//!
//! This module implements the LLMProvider trait for the Gemini
//! `generateContent` endpoint, including structured JSON output
//! (`responseSchema`) and Google Search grounding.
//! See: https://ai.google.dev/api/generate-content
//!
//! # Example
//!
//! ```no_run
//! use bist_llm::{CompletionRequest, LLMProvider, Message, Schema, Tool};
//! use bist_llm::providers::GeminiProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::new(std::env::var("GEMINI_API_KEY")?)?;
//!
//!     let request = CompletionRequest::builder("gemini-3-flash-preview")
//!         .add_message(Message::user("Current price of THYAO?"))
//!         .tool(Tool::google_search())
//!         .json_response(Schema::object(vec![("price", Schema::string())]))
//!         .build();
//!
//!     let response = provider.complete(request).await?;
//!     println!("{}", response.text.unwrap_or_default());
//!     Ok(())
//! }
//! ```

use crate::{
    CompletionRequest, CompletionResponse, FinishReason, LLMError, LLMProvider, Message, Part,
    Result, Role, Schema, TokenUsage, Tool,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Configuration for Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL of the API (default: "https://generativelanguage.googleapis.com/v1beta")
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set custom API base URL (e.g. a proxy or a local test server)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// First non-empty value `lookup` returns for the names in [`API_KEY_ENV_VARS`]
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Gemini provider
///
/// Supports the Gemini 2.x/3.x model families, e.g.:
/// - gemini-3-flash-preview
/// - gemini-2.5-flash
/// - gemini-2.5-pro
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with custom configuration
    ///
    /// Fails with [`LLMError::ConfigurationError`] if the API key is empty,
    /// so a provider that exists can always issue requests.
    pub fn with_config(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LLMError::ConfigurationError(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new Gemini provider with API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GeminiConfig::new(api_key))
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!("Sending request to Gemini API");

        let model = request.model.clone();
        let gemini_request = build_gemini_request(request);

        let response = self
            .client
            .post(self.endpoint(&model))
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 | 403 => LLMError::AuthenticationFailed,
                429 => LLMError::RateLimitExceeded(error_text),
                400 => LLMError::InvalidRequest(error_text),
                404 => LLMError::ModelNotFound(model),
                _ => LLMError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            LLMError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        parse_gemini_response(gemini_response)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ============================================================================
// Gemini-specific request types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Schema>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.max_output_tokens.is_none()
            && self.response_mime_type.is_none()
            && self.response_schema.is_none()
    }
}

// ============================================================================
// Gemini-specific response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

// ============================================================================
// Conversion functions
// ============================================================================

fn build_gemini_request(request: CompletionRequest) -> GeminiRequest {
    GeminiRequest {
        contents: request.messages,
        system_instruction: request.system_instruction.map(|text| SystemInstruction {
            parts: vec![Part { text }],
        }),
        tools: request.tools,
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
            response_mime_type: request.response_mime_type,
            response_schema: request.response_schema,
        },
    }
}

fn parse_gemini_response(response: GeminiResponse) -> Result<CompletionResponse> {
    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        LLMError::UnexpectedResponse("No candidates in response".to_string())
    })?;

    let finish_reason = candidate
        .finish_reason
        .as_deref()
        .map_or(FinishReason::Stop, map_finish_reason);

    let parts = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .map(|text| Part { text })
        .collect();
    let text = Message {
        role: Role::Model,
        parts,
    }
    .text();

    let usage = response
        .usage_metadata
        .map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        })
        .unwrap_or_default();

    debug!(
        "Received response - finish_reason: {:?}, tokens: {}/{}",
        finish_reason, usage.input_tokens, usage.output_tokens
    );

    Ok(CompletionResponse {
        text,
        finish_reason,
        usage,
    })
}

/// Map Gemini finish reason to our format
fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => FinishReason::Safety,
        "RECITATION" => FinishReason::Recitation,
        _ => {
            debug!("Unknown finish reason: {}", reason);
            FinishReason::Other
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
