//! Timeout error types.

use std::time::Duration;

/// A remote stage did not answer within its configured bound.
///
/// # Examples
///
/// ```
/// use bardic_error::TimeoutError;
/// use std::time::Duration;
///
/// let err = TimeoutError::new("generating", Duration::from_secs(120));
/// assert!(format!("{}", err).contains("generating"));
/// ```
#[derive(Debug, Clone)]
pub struct TimeoutError {
    /// Name of the stage that timed out
    pub stage: &'static str,
    /// Configured bound that elapsed
    pub after: Duration,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new TimeoutError for a stage at the current location.
    #[track_caller]
    pub fn new(stage: &'static str, after: Duration) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            after,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Timeout Error: {} did not finish within {:?} at line {} in {}",
            self.stage, self.after, self.line, self.file
        )
    }
}

impl std::error::Error for TimeoutError {}
