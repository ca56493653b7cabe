//! Bilingual prompt compiled once with MiniJinja

use crate::{Language, PromptError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

const ENGLISH: &str = "en";
const TURKISH: &str = "tr";

/// A prompt with an English and a Turkish variant
///
/// Both variants are compiled when the prompt is created. Rendering is
/// strict: a variable used by the template but missing from the context is
/// an error rather than an empty string.
pub struct Prompt {
    name: String,
    env: Environment<'static>,
}

impl Prompt {
    pub fn bilingual(
        name: impl Into<String>,
        english: &'static str,
        turkish: &'static str,
    ) -> Result<Self> {
        let name = name.into();
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (language, source) in [(ENGLISH, english), (TURKISH, turkish)] {
            env.add_template(language, source)
                .map_err(|e| PromptError::Syntax {
                    name: name.clone(),
                    language,
                    detail: e.to_string(),
                })?;
        }

        Ok(Self { name, env })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the variant for `language`
    ///
    /// Languages other than Turkish use the English variant.
    pub fn render<S: Serialize>(&self, language: &Language, vars: S) -> Result<String> {
        let variant = match language {
            Language::Turkish => TURKISH,
            _ => ENGLISH,
        };

        self.env
            .get_template(variant)
            .and_then(|template| template.render(vars))
            .map_err(|e| PromptError::Render {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn greeting() -> Prompt {
        Prompt::bilingual("greeting", "Analyze {{ symbol }}", "{{ symbol }} hissesini analiz et")
            .unwrap()
    }

    #[test]
    fn test_render_each_language() {
        let prompt = greeting();
        let vars = json!({ "symbol": "GARAN" });

        assert_eq!(prompt.render(&Language::English, &vars).unwrap(), "Analyze GARAN");
        assert_eq!(
            prompt.render(&Language::Turkish, &vars).unwrap(),
            "GARAN hissesini analiz et"
        );
    }

    #[test]
    fn test_other_language_uses_english() {
        let rendered = greeting()
            .render(&Language::Other("de".to_string()), json!({ "symbol": "ASELS" }))
            .unwrap();
        assert_eq!(rendered, "Analyze ASELS");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let err = greeting().render(&Language::English, json!({})).unwrap_err();
        assert!(matches!(err, PromptError::Render { ref name, .. } if name == "greeting"));
    }

    #[test]
    fn test_syntax_error_names_the_variant() {
        let err = Prompt::bilingual("broken", "fine", "{{ unclosed").unwrap_err();
        assert!(matches!(err, PromptError::Syntax { language: "tr", .. }));
    }
}
