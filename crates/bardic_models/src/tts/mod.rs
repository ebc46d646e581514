//! Google Translate text-to-speech.

mod client;
mod language;
mod tokenizer;

pub use client::{DEFAULT_TTS_BASE_URL, GoogleTranslateTts};
pub use language::{SUPPORTED_LANGUAGES, is_supported_language};
pub use tokenizer::{MAX_CHUNK_CHARS, chunk_text};
