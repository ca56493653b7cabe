//! Prompt templates for the BIST analysis terminal
//!
//! ```
//! use bist_prompt::{Language, Prompt};
//! use serde_json::json;
//!
//! let prompt = Prompt::bilingual(
//!     "greeting",
//!     "Analyze {{ symbol }}",
//!     "{{ symbol }} hissesini analiz et",
//! ).unwrap();
//!
//! let tr = prompt.render(&Language::Turkish, json!({ "symbol": "GARAN" })).unwrap();
//! assert_eq!(tr, "GARAN hissesini analiz et");
//! ```

mod error;
mod language;
mod prompt;

pub use error::{PromptError, Result};
pub use language::Language;
pub use prompt::Prompt;
