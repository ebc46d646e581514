//! Crate-level error aggregation.

use crate::{
    AssetUploadError, ConfigError, GenerationError, SynthesisError, TimeoutError, ValidationError,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum BardicErrorKind {
    /// Startup configuration error
    Config(ConfigError),
    /// Rejected user input
    Validation(ValidationError),
    /// Asset staging or upload failure
    AssetUpload(AssetUploadError),
    /// Generation engine failure
    Generation(GenerationError),
    /// Speech synthesis failure
    Synthesis(SynthesisError),
    /// Remote stage exceeded its bound
    Timeout(TimeoutError),
}

impl std::fmt::Display for BardicErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BardicErrorKind::Config(e) => write!(f, "{}", e),
            BardicErrorKind::Validation(e) => write!(f, "{}", e),
            BardicErrorKind::AssetUpload(e) => write!(f, "{}", e),
            BardicErrorKind::Generation(e) => write!(f, "{}", e),
            BardicErrorKind::Synthesis(e) => write!(f, "{}", e),
            BardicErrorKind::Timeout(e) => write!(f, "{}", e),
        }
    }
}

/// Bardic error with kind discrimination.
///
/// # Examples
///
/// ```
/// use bardic_error::{BardicError, BardicErrorKind, ValidationError, ValidationErrorKind};
///
/// let err: BardicError = ValidationError::new(ValidationErrorKind::EmptyPrompt).into();
/// assert!(matches!(err.kind(), BardicErrorKind::Validation(_)));
/// assert_eq!(err.user_message(), "Please enter a prompt");
/// ```
#[derive(Debug)]
pub struct BardicError(Box<BardicErrorKind>);

impl BardicError {
    /// Create a new error from a kind.
    pub fn new(kind: BardicErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BardicErrorKind {
        &self.0
    }

    /// Short message suitable for the status banner, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            BardicErrorKind::Config(e) => e.message.clone(),
            BardicErrorKind::Validation(e) => e.kind.to_string(),
            BardicErrorKind::AssetUpload(e) => format!("File upload failed: {}", e.kind),
            BardicErrorKind::Generation(e) => format!("Generation failed: {}", e.kind),
            BardicErrorKind::Synthesis(e) => format!("Speech synthesis failed: {}", e.kind),
            BardicErrorKind::Timeout(e) => {
                format!("Timed out while {} (after {:?})", e.stage, e.after)
            }
        }
    }
}

impl std::fmt::Display for BardicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bardic Error: {}", self.0)
    }
}

impl std::error::Error for BardicError {}

// Generic From implementation for any type that converts to BardicErrorKind
impl<T> From<T> for BardicError
where
    T: Into<BardicErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bardic operations.
pub type BardicResult<T> = std::result::Result<T, BardicError>;
