//! Translate TTS client implementing [`SpeechService`].

use super::{MAX_CHUNK_CHARS, chunk_text, is_supported_language};
use async_trait::async_trait;
use bardic_error::{SynthesisError, SynthesisErrorKind};
use bardic_interface::SpeechService;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Public translate endpoint host.
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Speech client for the Google Translate `translate_tts` endpoint.
///
/// Each chunk of text is fetched as its own MP3 segment; segments are
/// concatenated in order, which MP3 players handle as one stream.
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: Client,
    base_url: String,
}

impl GoogleTranslateTts {
    /// Creates a client against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisErrorKind::Request`] if the HTTP client cannot be
    /// built.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Request(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "TTS request failed");
                SynthesisError::new(SynthesisErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "TTS endpoint rejected chunk");
            return Err(SynthesisError::new(SynthesisErrorKind::HttpError {
                status_code: status.as_u16(),
                message: if body.is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_string()
                } else {
                    body
                },
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Request(e.to_string())))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechService for GoogleTranslateTts {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        if !is_supported_language(language) {
            return Err(SynthesisError::new(
                SynthesisErrorKind::UnsupportedLanguage(language.to_string()),
            ));
        }

        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisError::new(SynthesisErrorKind::EmptyText));
        }

        debug!(chunks = chunks.len(), "Synthesizing speech");

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let segment = self.fetch_chunk(chunk, language, idx, chunks.len()).await?;
            debug!(idx, bytes = segment.len(), "Fetched audio segment");
            audio.extend_from_slice(&segment);
        }

        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "google-translate-tts"
    }
}
