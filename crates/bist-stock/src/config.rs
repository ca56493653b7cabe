//! Configuration for stock analysis operations

use crate::error::{Result, StockError};
use bist_prompt::Language;
use std::time::Duration;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Gemini API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the analysis client
#[derive(Debug, Clone)]
pub struct StockConfig {
    /// Gemini API key; `None` makes every analysis fail with a configuration error
    pub api_key: Option<String>,

    /// Model identifier
    pub model: String,

    /// Base URL of the Gemini API
    pub api_base: String,

    /// Language of the narrative text (summary, reasoning)
    pub language: Language,

    /// HTTP request timeout
    pub request_timeout: Duration,

    /// Sampling temperature forwarded to the model, if set
    pub temperature: Option<f32>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            language: Language::Turkish,
            request_timeout: Duration::from_secs(120),
            temperature: None,
        }
    }
}

impl StockConfig {
    /// Create a new configuration builder
    pub fn builder() -> StockConfigBuilder {
        StockConfigBuilder::default()
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(StockError::ConfigError("model must not be empty".to_string()));
        }

        if self.api_base.trim().is_empty() {
            return Err(StockError::ConfigError("API base URL must not be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(StockError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for StockConfig
#[derive(Debug, Default)]
pub struct StockConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    api_base: Option<String>,
    language: Option<Language>,
    request_timeout: Option<Duration>,
    temperature: Option<f32>,
}

impl StockConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the output language
    pub fn language(mut self, language: impl Into<Language>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Fill unset fields from environment variables
    ///
    /// A missing key is not an error here; it surfaces when an analysis is
    /// requested.
    pub fn with_env(self) -> Self {
        self.with_vars(|name| std::env::var(name).ok())
    }

    /// Fill unset fields from the variables `lookup` resolves
    ///
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_MODEL`,
    /// `GEMINI_API_BASE` and `BIST_LANGUAGE`. Blank values count as unset.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if self.api_key.is_none() {
            self.api_key = bist_llm::providers::gemini::api_key_from(&lookup);
        }
        if self.model.is_none() {
            self.model = var("GEMINI_MODEL");
        }
        if self.api_base.is_none() {
            self.api_base = var("GEMINI_API_BASE");
        }
        if self.language.is_none() {
            self.language = var("BIST_LANGUAGE").map(Language::from);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StockConfig> {
        let defaults = StockConfig::default();

        let config = StockConfig {
            api_key: self.api_key.filter(|key| !key.trim().is_empty()),
            model: self.model.unwrap_or(defaults.model),
            api_base: self.api_base.unwrap_or(defaults.api_base),
            language: self.language.unwrap_or(defaults.language),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            temperature: self.temperature,
        };

        config.validate()?;
        Ok(config)
    }
}
