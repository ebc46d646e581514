//! Runs one invocation through every stage.

use crate::{
    AssetStager, GenerationOrchestrator, PipelineConfig, SpeechRenderer, ValidatedInput,
    validate,
};
use bardic_core::{
    AudioArtifact, GeneratedText, InvocationState, RemoteAssetHandle, Stage, UploadedAsset,
};
use bardic_error::{BardicError, BardicErrorKind, BardicResult, TimeoutError};
use bardic_interface::{GenerationService, SpeechService};
use std::future::Future;
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Raw form input for one invocation.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest {
    /// Prompt text as typed
    pub prompt: String,
    /// Image from the file picker, if one was chosen
    pub image: Option<UploadedAsset>,
}

impl PipelineRequest {
    /// Text-only request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    /// Request with an attached image.
    pub fn with_image(prompt: impl Into<String>, image: UploadedAsset) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
        }
    }
}

/// Everything one invocation produced, including how far it got.
///
/// A synthesis failure still carries the generated text.
#[derive(Debug)]
pub struct Invocation {
    id: Uuid,
    state: InvocationState,
    stages: Vec<Stage>,
    upload: Option<RemoteAssetHandle>,
    text: Option<GeneratedText>,
    audio: Option<AudioArtifact>,
    error: Option<BardicError>,
}

impl Invocation {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: InvocationState::Idle,
            stages: Vec::new(),
            upload: None,
            text: None,
            audio: None,
            error: None,
        }
    }

    fn enter(&mut self, stage: Stage) {
        self.state.enter(stage);
        self.stages.push(stage);
    }

    fn fail(mut self, error: BardicError) -> Self {
        self.state.fail();
        warn!(
            invocation_id = %self.id,
            stage = ?self.state.failed_stage(),
            error = %error,
            "Invocation failed"
        );
        self.error = Some(error);
        self
    }

    /// Identifier used in logs and temp file tracing.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Final state, either `Done` or `Failed(stage)`.
    pub fn state(&self) -> InvocationState {
        self.state
    }

    /// Stages entered, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Whether every stage succeeded.
    pub fn is_success(&self) -> bool {
        self.state == InvocationState::Done
    }

    /// Handle of the uploaded image, if one was uploaded.
    pub fn upload(&self) -> Option<&RemoteAssetHandle> {
        self.upload.as_ref()
    }

    /// Generated text, present whenever generation succeeded.
    pub fn text(&self) -> Option<&GeneratedText> {
        self.text.as_ref()
    }

    /// Synthesized audio, present only on success.
    pub fn audio(&self) -> Option<&AudioArtifact> {
        self.audio.as_ref()
    }

    /// Take the audio artifact out, handing over responsibility for its file.
    pub fn take_audio(&mut self) -> Option<AudioArtifact> {
        self.audio.take()
    }

    /// The failure that ended the invocation.
    pub fn error(&self) -> Option<&BardicError> {
        self.error.as_ref()
    }
}

/// The request pipeline over a generation engine `G` and a speech engine `S`.
#[derive(Debug)]
pub struct Pipeline<G, S> {
    generator: G,
    speaker: S,
    config: PipelineConfig,
}

impl<G, S> Pipeline<G, S>
where
    G: GenerationService,
    S: SpeechService,
{
    /// Creates a pipeline from its services and configuration.
    pub fn new(generator: G, speaker: S, config: PipelineConfig) -> Self {
        Self {
            generator,
            speaker,
            config,
        }
    }

    /// The configuration every invocation runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one invocation to completion or failure.
    ///
    /// Never returns an error itself; failures are recorded on the returned
    /// [`Invocation`] so the caller can show whatever was produced.
    #[instrument(skip_all, fields(has_image = request.image.is_some()))]
    pub async fn run(&self, request: PipelineRequest) -> Invocation {
        let mut invocation = Invocation::start();
        info!(invocation_id = %invocation.id, "Starting invocation");

        invocation.enter(Stage::Validating);
        let input: ValidatedInput = match validate(request.prompt, request.image) {
            Ok(input) => input,
            Err(e) => return invocation.fail(e.into()),
        };

        if let Some(image) = input.image() {
            invocation.enter(Stage::Staging);
            let stager = AssetStager::new(self.config.scratch_dir());
            let staged = bounded(
                Stage::Staging,
                *self.config.upload_timeout(),
                stager.stage(&self.generator, image),
            )
            .await;
            match staged {
                Ok(handle) => invocation.upload = Some(handle),
                Err(e) => return invocation.fail(e),
            }
        }

        invocation.enter(Stage::Generating);
        let orchestrator = GenerationOrchestrator::new(self.config.generation());
        let generated = bounded(
            Stage::Generating,
            *self.config.generation_timeout(),
            orchestrator.generate(&self.generator, input.prompt(), invocation.upload.as_ref()),
        )
        .await;
        let text = match generated {
            Ok(text) => text,
            Err(e) => return invocation.fail(e),
        };

        invocation.enter(Stage::Synthesizing);
        let renderer = SpeechRenderer::new(self.config.language(), self.config.scratch_dir());
        let rendered = bounded(
            Stage::Synthesizing,
            *self.config.synthesis_timeout(),
            renderer.render(&self.speaker, &text),
        )
        .await;
        invocation.text = Some(text);

        match rendered {
            Ok(audio) => invocation.audio = Some(audio),
            Err(e) => {
                error!(invocation_id = %invocation.id, "Speech failed; keeping generated text");
                return invocation.fail(e);
            }
        }

        invocation.state.finish();
        info!(invocation_id = %invocation.id, "Invocation complete");
        invocation
    }
}

/// Await a stage future, failing with [`TimeoutError`] once `limit` elapses.
async fn bounded<T, E, F>(stage: Stage, limit: Duration, fut: F) -> BardicResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BardicErrorKind>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(|e| BardicError::new(e.into())),
        Err(_) => Err(TimeoutError::new(stage.as_str(), limit).into()),
    }
}
