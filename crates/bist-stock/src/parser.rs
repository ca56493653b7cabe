//! Turning the model's raw text into an [`AnalysisResult`]

use crate::analysis::{AnalysisResult, local_timestamp, response_schema};
use crate::error::{Result, StockError};
use bist_llm::Schema;
use regex::Regex;
use serde_json::Value;

/// Parses and validates analysis replies
///
/// The reply may be wrapped in a Markdown code fence. After parsing, the JSON
/// is checked against the same schema that was declared in the request, so a
/// result is either complete or rejected.
#[derive(Debug, Clone)]
pub struct ResponseParser {
    schema: Schema,
    fence: Regex,
}

impl ResponseParser {
    pub fn new() -> Result<Self> {
        Self::with_schema(response_schema())
    }

    pub fn with_schema(schema: Schema) -> Result<Self> {
        let fence = Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$")
            .map_err(|e| StockError::InvalidPattern(e.to_string()))?;

        Ok(Self { schema, fence })
    }

    /// The schema replies are validated against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse a reply and stamp the local retrieval time
    pub fn parse(&self, text: &str) -> Result<AnalysisResult> {
        let json = self.strip_code_fence(text);
        if json.is_empty() {
            return Err(StockError::InvalidResponse("empty reply".to_string()));
        }

        let value: Value = serde_json::from_str(json)?;
        self.schema
            .validate(&value)
            .map_err(|violation| StockError::InvalidResponse(violation.to_string()))?;

        let mut result: AnalysisResult = serde_json::from_value(value)?;
        result.retrieved_at = local_timestamp();
        Ok(result)
    }

    /// Remove an optional surrounding code fence (```json ... ```)
    pub fn strip_code_fence<'a>(&self, text: &'a str) -> &'a str {
        match self.fence.captures(text).and_then(|caps| caps.get(1)) {
            Some(inner) => inner.as_str(),
            None => text.trim(),
        }
    }
}
