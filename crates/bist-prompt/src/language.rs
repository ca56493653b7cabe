//! Language selection for prompts and UI copy
//!
//! Turkish is the default for the terminal. Any other ISO 639-1 code is
//! carried in `Other`; prompts for it use English instructions while the
//! model is still asked to answer in that language.

use serde::{Deserialize, Serialize};

/// # Examples
///
/// ```
/// use bist_prompt::Language;
///
/// assert_eq!(Language::from_code("TR"), Language::Turkish);
/// assert_eq!(Language::Turkish.prompt_name(), "Türkçe");
/// assert_eq!(Language::from_code("de").prompt_name(), "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    English,
    #[default]
    Turkish,
    Other(String),
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
            Language::Other(code) => code,
        }
    }

    /// Name written into prompts when asking for answers in this language
    pub fn prompt_name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Turkish => "Türkçe",
            Language::Other(code) => code,
        }
    }

    /// Parse an ISO 639-1 code or a common name, ignoring case
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" | "en-us" | "en-gb" => Language::English,
            "tr" | "turkish" | "türkçe" | "turkce" | "tr-tr" => Language::Turkish,
            other => Language::Other(other.to_string()),
        }
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code(" tr "), Language::Turkish);
        assert_eq!(Language::from_code("TR-tr"), Language::Turkish);
        assert_eq!(Language::from_code("Türkçe"), Language::Turkish);
        assert_eq!(Language::from_code("de"), Language::Other("de".to_string()));
        assert_eq!(Language::from_code("de").code(), "de");
    }

    #[test]
    fn test_default_is_turkish() {
        assert_eq!(Language::default(), Language::Turkish);
    }
}
