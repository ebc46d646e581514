//! Bardic: prompt in, passage and speech out.
//!
//! This crate ties the workspace together. It loads [`AppConfig`], builds the
//! Gemini and speech clients, wraps them in a [`Pipeline`] and hands that to
//! the [`bardic_server`] router.
//!
//! ```no_run
//! # async fn run() -> bardic::BardicResult<()> {
//! let config = bardic::AppConfig::load(None)?;
//! let router = bardic::app(&config)?;
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::{API_KEY_VARS, AppConfig, DEFAULT_LISTEN, DEFAULT_MAX_UPLOAD_BYTES};

pub use bardic_core::{
    AudioArtifact, ConversationTurn, GeneratedText, GenerationConfig, ImageFormat,
    InvocationState, Prompt, RemoteAssetHandle, Stage, UploadedAsset, init_tracing,
};
pub use bardic_error::{BardicError, BardicErrorKind, BardicResult, ConfigError};
pub use bardic_interface::{GenerationService, SpeechService};
pub use bardic_models::{GeminiClient, GoogleTranslateTts};
pub use bardic_pipeline::{Invocation, Pipeline, PipelineConfig, PipelineRequest};

use std::sync::Arc;
use tracing::{info, instrument};

/// The concrete pipeline the binary serves.
pub type BardicPipeline = Pipeline<GeminiClient, GoogleTranslateTts>;

/// Build the Gemini and speech clients and the pipeline over them.
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be constructed or the
/// pipeline settings are invalid.
#[instrument(skip_all, fields(model = %config.model()))]
pub fn build_pipeline(config: &AppConfig) -> BardicResult<BardicPipeline> {
    let generator = GeminiClient::new(
        config.api_key(),
        config.model(),
        config.gemini_base_url(),
        config.generation_timeout().max(config.upload_timeout()),
    )?;
    let speaker = GoogleTranslateTts::new(config.tts_base_url(), config.synthesis_timeout())?;

    info!(
        provider = generator.provider_name(),
        speech = speaker.provider_name(),
        "Clients ready"
    );
    Ok(Pipeline::new(generator, speaker, config.pipeline_config()?))
}

/// Build the HTTP application for `config`.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built.
pub fn app(config: &AppConfig) -> BardicResult<axum::Router> {
    let pipeline = Arc::new(build_pipeline(config)?);
    Ok(bardic_server::create_router(
        pipeline,
        *config.max_upload_bytes(),
    ))
}
