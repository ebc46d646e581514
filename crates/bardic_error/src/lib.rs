//! Error types for the Bardic pipeline.
//!
//! Every stage of the pipeline owns an error type carrying the source location
//! where it was raised. [`BardicError`] aggregates them for callers that only
//! need to report a failure.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod generation;
mod synthesis;
mod timeout;
mod upload;
mod validation;

pub use config::ConfigError;
pub use error::{BardicError, BardicErrorKind, BardicResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
pub use timeout::TimeoutError;
pub use upload::{AssetUploadError, AssetUploadErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
