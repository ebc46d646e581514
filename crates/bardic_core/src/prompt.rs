//! The user's prompt.

use bardic_error::{ValidationError, ValidationErrorKind};
use serde::Serialize;

/// A prompt that is non-empty once surrounding whitespace is trimmed.
///
/// The original text is kept as typed; only the emptiness check trims.
///
/// # Examples
///
/// ```
/// use bardic_core::Prompt;
///
/// let prompt = Prompt::parse("  Write a haiku about the ocean ").unwrap();
/// assert_eq!(prompt.as_str(), "  Write a haiku about the ocean ");
///
/// assert!(Prompt::parse("   \n\t").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub struct Prompt(String);

impl Prompt {
    /// Validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::EmptyPrompt`] if the text is empty or
    /// whitespace only.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt));
        }
        Ok(Self(raw))
    }

    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
