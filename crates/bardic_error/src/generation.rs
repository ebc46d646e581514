//! Generation engine error types.

/// Generation engine failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key was rejected before the request was sent
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Engine returned a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response carried no usable candidate (blocked or truncated)
    #[display("No candidates returned: {}", _0)]
    NoCandidates(String),
    /// Response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use bardic_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpError {
///     status_code: 429,
///     message: "Quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("Quota exceeded"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
