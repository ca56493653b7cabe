//! Error types for stock analysis operations

use thiserror::Error;

/// Stock analysis specific errors
///
/// Only [`StockError::ConfigError`] ever leaves
/// [`AnalysisClient::analyze`](crate::AnalysisClient::analyze); the remaining
/// variants are absorbed into a degraded outcome there.
#[derive(Debug, Error)]
pub enum StockError {
    /// Missing or invalid configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The model answered, but not with a usable analysis
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// LLM provider error (transport, status code, empty answer)
    #[error("LLM error: {0}")]
    Llm(#[from] bist_llm::LLMError),

    /// Prompt rendering error
    #[error("Prompt error: {0}")]
    Prompt(#[from] bist_prompt::PromptError),

    /// Invalid regular expression
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;
