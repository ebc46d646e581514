//! Asset upload error types.

/// Asset upload failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssetUploadErrorKind {
    /// Staging file could not be written or read back
    #[display("Staging file I/O failed: {}", _0)]
    Io(String),
    /// Request never produced a response
    #[display("Upload request failed: {}", _0)]
    Request(String),
    /// Service rejected the upload
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Resumable upload start did not return a session URL
    #[display("Upload session URL missing from response")]
    MissingUploadUrl,
    /// Upload response body could not be decoded
    #[display("Upload response parsing failed: {}", _0)]
    ResponseParsing(String),
}

/// Asset upload error with source location tracking.
///
/// # Examples
///
/// ```
/// use bardic_error::{AssetUploadError, AssetUploadErrorKind};
///
/// let err = AssetUploadError::new(AssetUploadErrorKind::HttpError {
///     status_code: 400,
///     message: "Unsupported MIME type".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 400"));
/// ```
#[derive(Debug, Clone)]
pub struct AssetUploadError {
    /// The kind of error that occurred
    pub kind: AssetUploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssetUploadError {
    /// Create a new AssetUploadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetUploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AssetUploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "File upload failed: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AssetUploadError {}
