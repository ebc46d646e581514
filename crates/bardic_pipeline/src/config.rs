//! Pipeline configuration.

use bardic_core::GenerationConfig;
use derive_getters::Getters;
use std::path::PathBuf;
use std::time::Duration;

/// Settings fixed for the life of the process and shared by every invocation.
///
/// # Examples
///
/// ```
/// use bardic_pipeline::PipelineConfig;
/// use std::time::Duration;
///
/// let config = PipelineConfig::builder()
///     .language("fr")
///     .generation_timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.language(), "fr");
/// assert_eq!(config.generation().top_k, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PipelineConfig {
    /// Language the generated text is spoken in
    #[builder(default = "PipelineConfig::DEFAULT_LANGUAGE.to_string()")]
    language: String,
    /// Directory holding staged uploads and rendered audio
    #[builder(default = "std::env::temp_dir()")]
    scratch_dir: PathBuf,
    /// Bound on the upload stage
    #[builder(default = "PipelineConfig::DEFAULT_UPLOAD_TIMEOUT")]
    upload_timeout: Duration,
    /// Bound on the generation stage
    #[builder(default = "PipelineConfig::DEFAULT_GENERATION_TIMEOUT")]
    generation_timeout: Duration,
    /// Bound on the synthesis stage
    #[builder(default = "PipelineConfig::DEFAULT_SYNTHESIS_TIMEOUT")]
    synthesis_timeout: Duration,
    /// Sampling parameters; always the fixed set
    #[builder(setter(skip), default = "GenerationConfig::FIXED")]
    generation: GenerationConfig,
}

impl PipelineConfig {
    pub const DEFAULT_LANGUAGE: &'static str = "en";
    pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);
    pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(120);
    pub const DEFAULT_SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

    /// Returns a builder for constructing a PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: Self::DEFAULT_LANGUAGE.to_string(),
            scratch_dir: std::env::temp_dir(),
            upload_timeout: Self::DEFAULT_UPLOAD_TIMEOUT,
            generation_timeout: Self::DEFAULT_GENERATION_TIMEOUT,
            synthesis_timeout: Self::DEFAULT_SYNTHESIS_TIMEOUT,
            generation: GenerationConfig::FIXED,
        }
    }
}
