//! Sampling configuration and generated output.

use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation request.
///
/// The values are fixed; [`GenerationConfig::default`] is the only
/// configuration the pipeline uses.
///
/// # Examples
///
/// ```
/// use bardic_core::GenerationConfig;
///
/// let config = GenerationConfig::default();
/// assert_eq!(config.top_k, 40);
/// assert_eq!(config.response_mime_type, "text/plain");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: &'static str,
}

impl GenerationConfig {
    pub const FIXED: GenerationConfig = GenerationConfig {
        temperature: 0.9,
        top_p: 0.95,
        top_k: 40,
        max_output_tokens: 8192,
        response_mime_type: "text/plain",
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Plain text extracted from the generation engine's response.
///
/// May be empty; the engine can succeed with no text.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
pub struct GeneratedText(String);

impl GeneratedText {
    /// Wrap engine output.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The generated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the engine returned no text at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
