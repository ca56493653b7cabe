//! Shared fixtures for unit tests

use crate::controller::AppContext;
use crate::i18n::TURKISH;
use crate::list_view::ListView;
use async_trait::async_trait;
use bist_llm::{CompletionRequest, CompletionResponse, FinishReason, LLMProvider, TokenUsage};
use bist_stock::{AnalysisClient, AnalysisResult, StockConfig, TickerCatalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Provider {}

    #[async_trait]
    impl LLMProvider for Provider {
        async fn complete(&self, request: CompletionRequest) -> bist_llm::Result<CompletionResponse>;
        fn name(&self) -> &'static str;
    }
}

pub const REPLY: &str = r#"{
    "fundamentals": { "price": "312,50 TL", "peRatio": "4,1", "marketCap": "431 Milyar TL", "volume": "12,3 Milyar TL" },
    "technicals": [
        { "name": "RSI", "value": "61", "signal": "Buy" },
        { "name": "MACD", "value": "-0,4", "signal": "Sell" }
    ],
    "predictions": [
        { "period": "Day", "direction": "UP", "percentageChange": "+1.2%", "reasoning": "Güçlü hacim." },
        { "period": "Week", "direction": "NEUTRAL", "percentageChange": "0.5%", "reasoning": "Yatay seyir." },
        { "period": "Month", "direction": "DOWN", "percentageChange": "-3%", "reasoning": "Kâr satışı." }
    ],
    "summary": "Olumlu görünüm. Dirençler izlenmeli."
}"#;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(view: &mut ListView, text: &str) {
    for c in text.chars() {
        view.handle_key(key(KeyCode::Char(c)));
    }
}

/// Analysis result equal to [`REPLY`]
pub fn sample_result() -> AnalysisResult {
    let mut result: AnalysisResult = serde_json::from_str(REPLY).unwrap();
    result.retrieved_at = "14:05:09".to_string();
    result
}

/// Provider answering every request with [`REPLY`]
pub fn replying_provider() -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_complete().returning(|_| {
        Ok(CompletionResponse {
            text: Some(REPLY.to_string()),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::default(),
        })
    });
    provider
}

/// Context whose client answers with [`REPLY`]
pub fn live_context() -> AppContext {
    let client = AnalysisClient::with_provider(Arc::new(replying_provider()), StockConfig::default())
        .unwrap();
    AppContext::new(TickerCatalog::bist100(), Arc::new(client), &TURKISH)
}

/// Context whose client has no API key
pub fn unconfigured_context() -> AppContext {
    let client = AnalysisClient::from_config(StockConfig::default()).unwrap();
    AppContext::new(TickerCatalog::bist100(), Arc::new(client), &TURKISH)
}
