//! Speech synthesis error types.

/// Speech synthesis failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// Nothing speakable in the supplied text
    #[display("No text to speak")]
    EmptyText,
    /// Requested language is not offered by the engine
    #[display("Language not supported: {}", _0)]
    UnsupportedLanguage(String),
    /// Request never produced a response
    #[display("TTS request failed: {}", _0)]
    Request(String),
    /// Engine returned a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Audio file could not be written
    #[display("Audio file I/O failed: {}", _0)]
    Io(String),
}

/// Synthesis error with source location tracking.
///
/// # Examples
///
/// ```
/// use bardic_error::{SynthesisError, SynthesisErrorKind};
///
/// let err = SynthesisError::new(SynthesisErrorKind::EmptyText);
/// assert!(format!("{}", err).contains("No text to speak"));
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new SynthesisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Speech Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for SynthesisError {}
