//! AI-backed analysis client
//!
//! [`AnalysisClient::analyze`] has two outcomes only:
//!
//! - `Err(StockError::ConfigError)` when no API key is configured; raised
//!   before anything is sent
//! - `Ok(AnalysisOutcome)` otherwise. Prompt rendering failures, transport
//!   errors, error statuses, empty answers, malformed JSON and schema
//!   violations are logged and replaced by the fallback payload
//!   ([`AnalysisOutcome::Degraded`]).

use crate::analysis::{AnalysisOutcome, AnalysisResult, local_timestamp};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::parser::ResponseParser;
use crate::prompts;
use bist_llm::providers::{GeminiConfig, GeminiProvider};
use bist_llm::{CompletionRequest, LLMError, LLMProvider, Message, Tool};
use bist_prompt::Prompt;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Client that asks a search-grounded LLM for a structured stock analysis
pub struct AnalysisClient {
    provider: Option<Arc<dyn LLMProvider>>,
    config: StockConfig,
    prompt: Prompt,
    system_prompt: Prompt,
    parser: ResponseParser,
}

impl AnalysisClient {
    /// Create a client talking to Gemini
    ///
    /// Without an API key no provider is constructed; every call to
    /// [`analyze`](Self::analyze) then fails with a configuration error.
    pub fn from_config(config: StockConfig) -> Result<Self> {
        let provider = match &config.api_key {
            Some(key) => {
                let gemini = GeminiConfig::new(key.clone())
                    .with_api_base(config.api_base.clone())
                    .with_timeout(config.request_timeout.as_secs());
                Some(Arc::new(GeminiProvider::with_config(gemini)?) as Arc<dyn LLMProvider>)
            }
            None => None,
        };

        Self::build(provider, config)
    }

    /// Create a client with an explicit provider
    pub fn with_provider(provider: Arc<dyn LLMProvider>, config: StockConfig) -> Result<Self> {
        Self::build(Some(provider), config)
    }

    fn build(provider: Option<Arc<dyn LLMProvider>>, config: StockConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            provider,
            prompt: prompts::analysis_prompt()?,
            system_prompt: prompts::system_prompt()?,
            parser: ResponseParser::new()?,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &StockConfig {
        &self.config
    }

    /// Analyze one ticker
    ///
    /// Issues exactly one request per call; nothing is cached or retried.
    #[instrument(skip(self), fields(model = %self.config.model))]
    pub async fn analyze(&self, symbol: &str, display_name: &str) -> Result<AnalysisOutcome> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(StockError::ConfigError(
                "API key missing. Set GEMINI_API_KEY (or API_KEY).".to_string(),
            ));
        };

        info!("Starting analysis");
        match self.fetch(provider.as_ref(), symbol, display_name).await {
            Ok(result) => {
                info!("Analysis completed");
                Ok(AnalysisOutcome::Live(result))
            }
            Err(e) => {
                warn!(error = %e, "Analysis unavailable, using fallback data");
                Ok(AnalysisOutcome::Degraded(AnalysisResult::fallback(local_timestamp())))
            }
        }
    }

    /// Build the completion request for one ticker
    pub fn build_request(&self, symbol: &str, display_name: &str) -> Result<CompletionRequest> {
        let language = &self.config.language;
        let vars = json!({
            "symbol": symbol,
            "name": display_name,
            "output_language": language.prompt_name(),
        });

        let prompt = self.prompt.render(language, &vars)?;
        let system = self.system_prompt.render(language, &vars)?;

        let mut builder = CompletionRequest::builder(&self.config.model)
            .system_instruction(system)
            .add_message(Message::user(prompt))
            .tool(Tool::google_search())
            .json_response(self.parser.schema().clone());

        if let Some(temperature) = self.config.temperature {
            builder = builder.temperature(temperature);
        }

        Ok(builder.build())
    }

    async fn fetch(
        &self,
        provider: &dyn LLMProvider,
        symbol: &str,
        display_name: &str,
    ) -> Result<AnalysisResult> {
        let request = self.build_request(symbol, display_name)?;
        let response = provider.complete(request).await?;
        debug!(
            finish_reason = ?response.finish_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Received analysis reply"
        );

        let text = response.text.ok_or(LLMError::EmptyResponse)?;
        self.parser.parse(&text)
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("has_provider", &self.provider.is_some())
            .field("model", &self.config.model)
            .field("language", &self.config.language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Horizon, Signal};
    use async_trait::async_trait;
    use bist_llm::{CompletionResponse, FinishReason, JSON_MIME_TYPE, TokenUsage};
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait]
        impl LLMProvider for Provider {
            async fn complete(&self, request: CompletionRequest) -> bist_llm::Result<CompletionResponse>;
            fn name(&self) -> &'static str;
        }
    }

    const REPLY: &str = r#"{
        "fundamentals": { "price": "312,50 TL", "peRatio": "4,1", "marketCap": "431 Milyar TL", "volume": "12,3 Milyar TL" },
        "technicals": [
            { "name": "RSI", "value": "61", "signal": "Buy" },
            { "name": "MACD", "value": "1,4", "signal": "Buy" }
        ],
        "predictions": [
            { "period": "Day", "direction": "UP", "percentageChange": "+1.2%", "reasoning": "Güçlü hacim." },
            { "period": "Week", "direction": "NEUTRAL", "percentageChange": "0.5%", "reasoning": "Yatay seyir." },
            { "period": "Month", "direction": "DOWN", "percentageChange": "-3%", "reasoning": "Kâr satışı." }
        ],
        "summary": "Olumlu görünüm. Dirençler izlenmeli."
    }"#;

    fn reply(text: Option<&str>) -> CompletionResponse {
        CompletionResponse {
            text: text.map(str::to_string),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::default(),
        }
    }

    fn client_with(provider: MockProvider) -> AnalysisClient {
        AnalysisClient::with_provider(Arc::new(provider), StockConfig::default()).unwrap()
    }

    fn assert_fallback(outcome: &AnalysisOutcome) {
        assert!(outcome.is_degraded());
        let result = outcome.result();
        let expected = AnalysisResult::fallback(result.retrieved_at.clone());
        assert_eq!(result, &expected);
        assert!(!result.retrieved_at.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let client = AnalysisClient::from_config(StockConfig::default()).unwrap();
        let result = client.analyze("THYAO", "Türk Hava Yolları").await;
        assert!(matches!(result, Err(StockError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_well_formed_reply() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Ok(reply(Some(REPLY))));

        let outcome = client_with(provider).analyze("THYAO", "Türk Hava Yolları").await.unwrap();
        assert!(!outcome.is_degraded());

        let result = outcome.result();
        assert_eq!(result.fundamentals.price, "312,50 TL");
        assert_eq!(result.fundamentals.market_cap, "431 Milyar TL");
        assert_eq!(result.technicals[0].signal, Signal::Buy);
        assert_eq!(result.predictions[2].horizon, Horizon::Month);
        assert_eq!(result.predictions[2].direction, Direction::Down);
        assert_eq!(result.summary, "Olumlu görünüm. Dirençler izlenmeli.");
        assert!(!result.retrieved_at.is_empty());
    }

    #[tokio::test]
    async fn test_fenced_reply() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(reply(Some(&format!("```json\n{REPLY}\n```")))));

        let outcome = client_with(provider).analyze("GARAN", "Garanti BBVA").await.unwrap();
        assert!(!outcome.is_degraded());
    }

    #[tokio::test]
    async fn test_provider_error_returns_fallback() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LLMError::RateLimitExceeded("quota".to_string())));

        let outcome = client_with(provider).analyze("GARAN", "Garanti BBVA").await.unwrap();
        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn test_non_json_reply_returns_fallback() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(reply(Some("Piyasa kapalı."))));

        let outcome = client_with(provider).analyze("SISE", "Şişe Cam").await.unwrap();
        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn test_schema_violation_returns_fallback() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(reply(Some(r#"{ "summary": "Eksik." }"#))));

        let outcome = client_with(provider).analyze("SASA", "SASA Polyester").await.unwrap();
        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn test_empty_reply_returns_fallback() {
        let mut provider = MockProvider::new();
        provider.expect_complete().returning(|_| Ok(reply(None)));

        let outcome = client_with(provider).analyze("ASELS", "Aselsan").await.unwrap();
        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn test_prompt_render_failure_returns_fallback() {
        let mut client = client_with(MockProvider::new());
        client.prompt = Prompt::bilingual("broken", "{{ missing }}", "{{ missing }}").unwrap();

        let outcome = client.analyze("EREGL", "Ereğli Demir Çelik").await.unwrap();
        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn test_each_call_issues_a_fresh_request() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(2)
            .returning(|_| Ok(reply(Some(REPLY))));

        let client = client_with(provider);
        client.analyze("THYAO", "Türk Hava Yolları").await.unwrap();
        client.analyze("THYAO", "Türk Hava Yolları").await.unwrap();
    }

    #[test]
    fn test_request_shape() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .withf(|request| {
                request.tools == vec![Tool::google_search()]
                    && request.response_mime_type.as_deref() == Some(JSON_MIME_TYPE)
                    && request.response_schema.is_some()
                    && request.messages.len() == 1
                    && request.messages[0]
                        .text()
                        .is_some_and(|text| text.contains("KCHOL (Koç Holding)"))
            })
            .times(1)
            .returning(|_| Ok(reply(Some(REPLY))));

        let client = client_with(provider);
        let outcome = tokio_test::block_on(client.analyze("KCHOL", "Koç Holding")).unwrap();
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_build_request_language() {
        let config = StockConfig::builder()
            .language("en")
            .model("gemini-2.5-flash")
            .temperature(0.2)
            .build()
            .unwrap();
        let client = AnalysisClient::with_provider(Arc::new(MockProvider::new()), config).unwrap();

        let request = client.build_request("TUPRS", "Tüpraş").unwrap();
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.temperature, Some(0.2));

        let text = request.messages[0].text().unwrap();
        assert!(text.contains("TUPRS (Tüpraş) on Borsa Istanbul"));
        assert!(text.contains("must be in English"));
    }

    #[test]
    fn test_build_request_turkish_default() {
        let client =
            AnalysisClient::with_provider(Arc::new(MockProvider::new()), StockConfig::default())
                .unwrap();

        let request = client.build_request("BIMAS", "BİM Mağazalar").unwrap();
        let text = request.messages[0].text().unwrap();
        assert!(text.contains("Türkçe olmalıdır"));
        assert!(request.system_instruction.is_some());
        assert_eq!(request.temperature, None);
    }
}
