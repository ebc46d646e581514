//! Recording fakes for the generation and speech services.

#![allow(dead_code)]

use async_trait::async_trait;
use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, RemoteAssetHandle};
use bardic_error::{
    AssetUploadError, AssetUploadErrorKind, GenerationError, GenerationErrorKind, SynthesisError,
    SynthesisErrorKind,
};
use bardic_interface::{GenerationService, SpeechService};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

/// What the fake saw during an upload call.
#[derive(Debug, Clone)]
pub struct UploadCall {
    pub path: PathBuf,
    pub mime_type: String,
    pub existed: bool,
    pub contents: Vec<u8>,
}

/// Scripted outcome for a fake call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Succeed,
    Fail,
    Hang,
}

#[derive(Debug, Default)]
struct GeneratorLog {
    uploads: Vec<UploadCall>,
    turns: Vec<ConversationTurn>,
    configs: Vec<GenerationConfig>,
}

/// Fake generation engine.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    log: Arc<Mutex<GeneratorLog>>,
    upload: MockBehavior,
    generate: MockBehavior,
    reply: String,
}

impl MockGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            log: Arc::default(),
            upload: MockBehavior::Succeed,
            generate: MockBehavior::Succeed,
            reply: reply.to_string(),
        }
    }

    pub fn with_upload(mut self, behavior: MockBehavior) -> Self {
        self.upload = behavior;
        self
    }

    pub fn with_generate(mut self, behavior: MockBehavior) -> Self {
        self.generate = behavior;
        self
    }

    pub fn uploads(&self) -> Vec<UploadCall> {
        self.log.lock().unwrap().uploads.clone()
    }

    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.log.lock().unwrap().turns.clone()
    }

    pub fn configs(&self) -> Vec<GenerationConfig> {
        self.log.lock().unwrap().configs.clone()
    }

    pub fn remote_calls(&self) -> usize {
        let log = self.log.lock().unwrap();
        log.uploads.len() + log.turns.len()
    }
}

#[async_trait]
impl GenerationService for MockGenerator {
    async fn upload(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<RemoteAssetHandle, AssetUploadError> {
        let contents = std::fs::read(path).unwrap_or_default();
        self.log.lock().unwrap().uploads.push(UploadCall {
            path: path.to_path_buf(),
            mime_type: mime_type.to_string(),
            existed: path.exists(),
            contents,
        });

        match self.upload {
            MockBehavior::Succeed => Ok(RemoteAssetHandle::new(
                "https://files.example/v1beta/files/mock",
                "files/mock",
                mime_type,
            )),
            MockBehavior::Fail => Err(AssetUploadError::new(AssetUploadErrorKind::HttpError {
                status_code: 400,
                message: "Unsupported file".to_string(),
            })),
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("upload should have timed out")
            }
        }
    }

    async fn generate(
        &self,
        turn: &ConversationTurn,
        config: &GenerationConfig,
    ) -> Result<GeneratedText, GenerationError> {
        {
            let mut log = self.log.lock().unwrap();
            log.turns.push(turn.clone());
            log.configs.push(*config);
        }

        match self.generate {
            MockBehavior::Succeed => Ok(GeneratedText::new(self.reply.clone())),
            MockBehavior::Fail => Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: 429,
                message: "Quota exceeded".to_string(),
            })),
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("generation should have timed out")
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Fake speech engine that mirrors the real one's handling of empty text.
#[derive(Debug, Clone)]
pub struct MockSpeaker {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    behavior: MockBehavior,
}

impl MockSpeaker {
    pub fn new() -> Self {
        Self {
            calls: Arc::default(),
            behavior: MockBehavior::Succeed,
        }
    }

    pub fn with_behavior(mut self, behavior: MockBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechService for MockSpeaker {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language.to_string()));

        if text.trim().is_empty() {
            return Err(SynthesisError::new(SynthesisErrorKind::EmptyText));
        }

        match self.behavior {
            MockBehavior::Succeed => Ok(format!("MP3:{}", text).into_bytes()),
            MockBehavior::Fail => Err(SynthesisError::new(SynthesisErrorKind::HttpError {
                status_code: 503,
                message: "Service unavailable".to_string(),
            })),
            MockBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("synthesis should have timed out")
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-tts"
    }
}

/// Number of entries in a scratch directory.
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
