//! Core data types for the Bardic pipeline.
//!
//! This crate provides the values that flow between pipeline stages: the
//! validated prompt, the uploaded image and its remote handle, the single
//! conversation turn sent to the generation engine, and the audio artifact
//! produced by speech synthesis.

mod asset;
mod audio;
mod generation;
mod observability;
mod prompt;
mod stage;
mod turn;

pub use asset::{ImageFormat, RemoteAssetHandle, UploadedAsset};
pub use audio::{AUDIO_MIME_TYPE, AudioArtifact};
pub use generation::{GeneratedText, GenerationConfig};
pub use observability::init_tracing;
pub use prompt::Prompt;
pub use stage::{InvocationState, Stage};
pub use turn::{ConversationTurn, Part, Role};
