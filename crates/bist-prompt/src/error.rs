//! Prompt errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Error, Debug)]
pub enum PromptError {
    /// A language variant failed to compile
    #[error("Template '{name}' ({language}) does not compile: {detail}")]
    Syntax {
        name: String,
        language: &'static str,
        detail: String,
    },

    /// Rendering failed, e.g. a variable the template uses was not supplied
    #[error("Failed to render template '{name}': {detail}")]
    Render { name: String, detail: String },
}
