//! Speech synthesis contract.

use async_trait::async_trait;
use bardic_error::SynthesisError;

/// A remote engine that turns text into MP3 audio.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Synthesize `text` spoken in `language`, returning MP3 bytes.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
