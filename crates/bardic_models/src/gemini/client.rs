//! Gemini client implementing [`GenerationService`].

use super::conversions;
use super::dto::{
    GenerateContentResponse, UploadFileMetadata, UploadResponse, UploadStartRequest,
    api_error_message,
};
use async_trait::async_trait;
use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, RemoteAssetHandle};
use bardic_error::{
    AssetUploadError, AssetUploadErrorKind, GenerationError, GenerationErrorKind,
};
use bardic_interface::GenerationService;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Public Gemini endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as `x-goog-api-key`
    /// * `model` - Model identifier, e.g. `gemini-1.5-flash`
    /// * `base_url` - Scheme and host of the API, without a trailing path
    /// * `request_timeout` - Upper bound on any single HTTP exchange
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::ClientCreation`] if the key is blank or
    /// the HTTP client cannot be built.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::ClientCreation(
                "API key is empty".to_string(),
            )));
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        let model = model.as_ref().trim_start_matches("models/").to_string();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn upload_url(&self) -> String {
        format!("{}/upload/v1beta/files", self.base_url)
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn upload(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<RemoteAssetHandle, AssetUploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            error!(error = %e, "Failed to read staged file");
            AssetUploadError::new(AssetUploadErrorKind::Io(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!(bytes = bytes.len(), mime_type, "Starting resumable upload");

        let start = self
            .client
            .post(self.upload_url())
            .header("x-goog-api-key", &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len().to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&UploadStartRequest {
                file: UploadFileMetadata { display_name },
            })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Upload start request failed");
                AssetUploadError::new(AssetUploadErrorKind::Request(e.to_string()))
            })?;

        let status = start.status();
        if !status.is_success() {
            let body = start.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "Upload start rejected");
            return Err(AssetUploadError::new(AssetUploadErrorKind::HttpError {
                status_code: status.as_u16(),
                message: api_error_message(&body),
            }));
        }

        let session_url = start
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| AssetUploadError::new(AssetUploadErrorKind::MissingUploadUrl))?;

        let finish = self
            .client
            .post(&session_url)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Upload transfer failed");
                AssetUploadError::new(AssetUploadErrorKind::Request(e.to_string()))
            })?;

        let status = finish.status();
        if !status.is_success() {
            let body = finish.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "Upload finalize rejected");
            return Err(AssetUploadError::new(AssetUploadErrorKind::HttpError {
                status_code: status.as_u16(),
                message: api_error_message(&body),
            }));
        }

        let uploaded: UploadResponse = finish.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse upload response");
            AssetUploadError::new(AssetUploadErrorKind::ResponseParsing(e.to_string()))
        })?;

        let file = uploaded.file;
        info!(uri = %file.uri, name = %file.name, "File uploaded");

        Ok(RemoteAssetHandle::new(
            file.uri,
            file.name,
            file.mime_type.unwrap_or_else(|| mime_type.to_string()),
        ))
    }

    #[instrument(skip(self, turn, config), fields(model = %self.model, parts = turn.parts().len()))]
    async fn generate(
        &self,
        turn: &ConversationTurn,
        config: &GenerationConfig,
    ) -> Result<GeneratedText, GenerationError> {
        let request = conversions::to_generate_request(turn, config);

        debug!(
            contents = request.contents.len(),
            has_media = turn.has_media(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "API error");
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message: api_error_message(&body),
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(candidates = body.candidates.len(), "Received response");

        conversions::extract_text(&body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
