//! The Bardic request pipeline.
//!
//! One user action runs one [`Pipeline::run`]:
//!
//! 1. **Validate** the prompt and optional image ([`validate`]).
//! 2. **Stage** the image in a scoped temp file and upload it ([`AssetStager`]).
//! 3. **Generate** text from a single conversation turn ([`GenerationOrchestrator`]).
//! 4. **Synthesize** the text into an MP3 artifact ([`SpeechRenderer`]).
//!
//! Stages run strictly in sequence. A failure ends the invocation in that
//! stage; later stages are skipped. Remote stages are bounded by the timeouts
//! in [`PipelineConfig`].

mod config;
mod orchestrator;
mod pipeline;
mod renderer;
mod stager;
mod validator;

pub use config::{PipelineConfig, PipelineConfigBuilder, PipelineConfigBuilderError};
pub use orchestrator::GenerationOrchestrator;
pub use pipeline::{Invocation, Pipeline, PipelineRequest};
pub use renderer::SpeechRenderer;
pub use stager::AssetStager;
pub use validator::{ValidatedImage, ValidatedInput, validate};
