//! Trait definitions for the remote services the pipeline drives.
//!
//! The pipeline is generic over these traits so tests can substitute
//! recording fakes for the Gemini and speech clients.

#![warn(missing_docs)]

mod generation;
mod speech;

pub use generation::GenerationService;
pub use speech::SpeechService;
