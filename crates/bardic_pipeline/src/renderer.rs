//! Turns generated text into an audio artifact.

use bardic_core::{AudioArtifact, GeneratedText};
use bardic_error::{SynthesisError, SynthesisErrorKind};
use bardic_interface::SpeechService;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Synthesizes speech in one language and writes it to a scoped temp file.
#[derive(Debug, Clone)]
pub struct SpeechRenderer {
    language: String,
    scratch_dir: PathBuf,
}

impl SpeechRenderer {
    /// Render `language` speech into files under `scratch_dir`.
    pub fn new(language: impl Into<String>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            language: language.into(),
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Synthesize `text`, passing it through unchanged even when empty.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`SynthesisError`], or
    /// [`SynthesisErrorKind::Io`] if the audio cannot be written.
    #[instrument(skip_all, fields(provider = service.provider_name(), language = %self.language))]
    pub async fn render<S>(
        &self,
        service: &S,
        text: &GeneratedText,
    ) -> Result<AudioArtifact, SynthesisError>
    where
        S: SpeechService + ?Sized,
    {
        let audio = service.synthesize(text.as_str(), &self.language).await?;

        let io_err = |e: std::io::Error| SynthesisError::new(SynthesisErrorKind::Io(e.to_string()));
        let path = tempfile::Builder::new()
            .prefix("bardic-speech-")
            .suffix(".mp3")
            .tempfile_in(&self.scratch_dir)
            .map_err(io_err)?
            .into_temp_path();
        tokio::fs::write(&path, &audio).await.map_err(io_err)?;

        debug!(path = %path.display(), bytes = audio.len(), "Wrote audio artifact");

        Ok(AudioArtifact::new(path, self.language.clone(), audio.len() as u64))
    }
}
