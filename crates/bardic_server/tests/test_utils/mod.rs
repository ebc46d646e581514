//! Fake services and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, header};
use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, RemoteAssetHandle};
use bardic_error::{
    AssetUploadError, GenerationError, SynthesisError, SynthesisErrorKind,
};
use bardic_interface::{GenerationService, SpeechService};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BOUNDARY: &str = "bardic-test-boundary";
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Generation fake returning a fixed reply.
#[derive(Debug, Clone, Default)]
pub struct EchoGenerator {
    pub reply: String,
    pub uploads: Arc<AtomicUsize>,
    pub generations: Arc<AtomicUsize>,
}

impl EchoGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl GenerationService for EchoGenerator {
    async fn upload(
        &self,
        _path: &Path,
        mime_type: &str,
    ) -> Result<RemoteAssetHandle, AssetUploadError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(RemoteAssetHandle::new(
            "https://files.example/v1beta/files/photo",
            "files/photo",
            mime_type,
        ))
    }

    async fn generate(
        &self,
        _turn: &ConversationTurn,
        _config: &GenerationConfig,
    ) -> Result<GeneratedText, GenerationError> {
        self.generations.fetch_add(1, Ordering::SeqCst);
        Ok(GeneratedText::new(self.reply.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

/// Speech fake producing fixed bytes, failing on empty text.
#[derive(Debug, Clone, Default)]
pub struct ByteSpeaker;

#[async_trait]
impl SpeechService for ByteSpeaker {
    async fn synthesize(&self, text: &str, _language: &str) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::new(SynthesisErrorKind::EmptyText));
        }
        Ok(b"ID3fake".to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "bytes"
    }
}

/// A multipart part for [`multipart_request`].
pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// Build a `POST /generate` request with a multipart body.
pub fn multipart_request(parts: &[FormPart<'_>]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
