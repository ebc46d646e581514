//! Input validation error types.

/// Reasons user input is rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Prompt was empty after trimming whitespace
    #[display("Please enter a prompt")]
    EmptyPrompt,
    /// Uploaded file name has no extension to derive a media type from
    #[display("Uploaded file '{}' has no extension", _0)]
    MissingExtension(String),
    /// Uploaded file extension is not an accepted image type
    #[display("Unsupported image type '{}' (expected jpeg, jpg or png)", _0)]
    UnsupportedImageType(String),
    /// Uploaded file contained no bytes
    #[display("Uploaded file '{}' is empty", _0)]
    EmptyAsset(String),
    /// File content does not match the type its extension declares
    #[display("Uploaded file declares {} but its content is {}", declared, detected)]
    ContentMismatch {
        /// Media type implied by the extension
        declared: String,
        /// Media type detected from the content, or "unrecognized"
        detected: String,
    },
}

/// Validation error with source location.
///
/// # Examples
///
/// ```
/// use bardic_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyPrompt);
/// assert_eq!(err.kind.to_string(), "Please enter a prompt");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
