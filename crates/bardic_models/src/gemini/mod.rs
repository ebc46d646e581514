//! Gemini REST client.
//!
//! Uploads go through the resumable protocol of the Files API; generation
//! posts the seeded session to `models/{model}:generateContent`.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use conversions::SESSION_TRIGGER;
