//! Synthesized speech on disk.

use std::path::Path;
use tempfile::TempPath;

/// Media type of every artifact the speech renderer produces.
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// A temporary MP3 file holding synthesized speech.
///
/// The file is removed when the artifact is dropped, so the presentation layer
/// must read it before letting go.
#[derive(Debug)]
pub struct AudioArtifact {
    path: TempPath,
    language: String,
    byte_len: u64,
}

impl AudioArtifact {
    /// Take ownership of a written audio file.
    pub fn new(path: TempPath, language: impl Into<String>, byte_len: u64) -> Self {
        Self {
            path,
            language: language.into(),
            byte_len,
        }
    }

    /// Location of the audio file while the artifact is alive.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language the speech was synthesized in.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Size of the audio file in bytes.
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    /// Read the audio and delete the file.
    ///
    /// The file is removed even when the read fails.
    pub async fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        let bytes = tokio::fs::read(&self.path).await;
        let path = self.path;
        tokio::task::spawn_blocking(move || path.close())
            .await
            .map_err(std::io::Error::other)??;
        bytes
    }
}
