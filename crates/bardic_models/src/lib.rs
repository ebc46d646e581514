//! Remote service clients for Bardic.
//!
//! - [`GeminiClient`] talks to the Gemini `generativelanguage` REST API for
//!   file upload and content generation.
//! - [`GoogleTranslateTts`] renders speech through the Google Translate TTS
//!   endpoint, splitting long passages into request-sized chunks.

mod gemini;
mod tts;

pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL, GeminiClient, SESSION_TRIGGER};
pub use tts::{
    DEFAULT_TTS_BASE_URL, GoogleTranslateTts, MAX_CHUNK_CHARS, SUPPORTED_LANGUAGES, chunk_text,
    is_supported_language,
};
