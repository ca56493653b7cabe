//! Server-side tools the model may use while generating

use serde::{Deserialize, Serialize};

/// Tool made available to the model
///
/// Serializes in the externally-tagged form the API expects, e.g.
/// `{"google_search": {}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Grounding with live web search
    GoogleSearch(GoogleSearch),
}

/// Configuration for search grounding (currently empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

impl Tool {
    /// Web search grounding
    pub fn google_search() -> Self {
        Tool::GoogleSearch(GoogleSearch::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_search_wire_format() {
        let value = serde_json::to_value(Tool::google_search()).unwrap();
        assert_eq!(value, json!({ "google_search": {} }));
    }
}
