//! Application configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `BARDIC_*` environment variables. The API key comes from the environment
//! only.

use bardic_error::ConfigError;
use bardic_models::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL, DEFAULT_TTS_BASE_URL};
use bardic_pipeline::PipelineConfig;
use derive_getters::Getters;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: &[&str] = &["BARDIC_API_KEY", "API_KEY", "GEMINI_API_KEY"];

/// Address the form is served on unless configured otherwise.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8501";

/// Largest accepted form submission.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

const ENV_PREFIX: &str = "BARDIC";
const MISSING_KEY: &str = "API_KEY is not set. Please add it to your environment or .env file.";

/// Startup configuration, built once and passed into the pipeline and server.
#[derive(Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct AppConfig {
    /// Gemini API key
    #[serde(skip)]
    api_key: String,
    /// Gemini model name
    model: String,
    /// Language the passage is spoken in
    language: String,
    /// Base URL of the Gemini REST API
    gemini_base_url: String,
    /// Base URL of the speech endpoint
    tts_base_url: String,
    /// Bound on the upload stage, in seconds
    upload_timeout_secs: u64,
    /// Bound on the generation stage, in seconds
    generation_timeout_secs: u64,
    /// Bound on the synthesis stage, in seconds
    synthesis_timeout_secs: u64,
    /// Directory for temp files; the platform temp dir when unset
    #[serde(default)]
    scratch_dir: Option<PathBuf>,
    /// Address the HTTP server binds to
    listen: SocketAddr,
    /// Largest accepted form submission, in bytes
    max_upload_bytes: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("language", &self.language)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("tts_base_url", &self.tts_base_url)
            .field("upload_timeout_secs", &self.upload_timeout_secs)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("synthesis_timeout_secs", &self.synthesis_timeout_secs)
            .field("scratch_dir", &self.scratch_dir)
            .field("listen", &self.listen)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `explicit` must exist when given. Otherwise the per-user file
    /// (`<config dir>/bardic/bardic.toml`) is read if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a file cannot be parsed, a value has the
    /// wrong type, or no API key is set.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        match explicit {
            Some(path) => Self::from_sources(Some(path), true, &env),
            None => Self::from_sources(Self::default_path().as_deref(), false, &env),
        }
    }

    /// Per-user settings file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bardic").join("bardic.toml"))
    }

    /// Build configuration from an optional file and an explicit environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load`].
    #[instrument(skip(env))]
    pub fn from_sources(
        file: Option<&Path>,
        required: bool,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("model", DEFAULT_MODEL)
            .and_then(|b| b.set_default("language", PipelineConfig::DEFAULT_LANGUAGE))
            .and_then(|b| b.set_default("gemini_base_url", DEFAULT_GEMINI_BASE_URL))
            .and_then(|b| b.set_default("tts_base_url", DEFAULT_TTS_BASE_URL))
            .and_then(|b| {
                b.set_default(
                    "upload_timeout_secs",
                    PipelineConfig::DEFAULT_UPLOAD_TIMEOUT.as_secs(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "generation_timeout_secs",
                    PipelineConfig::DEFAULT_GENERATION_TIMEOUT.as_secs(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "synthesis_timeout_secs",
                    PipelineConfig::DEFAULT_SYNTHESIS_TIMEOUT.as_secs(),
                )
            })
            .and_then(|b| b.set_default("listen", DEFAULT_LISTEN))
            .and_then(|b| b.set_default("max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES))
            .map_err(|e| ConfigError::new(format!("Invalid default settings: {}", e)))?;

        if let Some(path) = file {
            debug!(path = %path.display(), required, "Adding settings file");
            builder = builder.add_source(config::File::from(path).required(required));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(env.clone().into_iter().collect())),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read settings: {}", e)))?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        config.check_timeouts()?;
        config.api_key = resolve_api_key(env).ok_or_else(|| ConfigError::new(MISSING_KEY))?;

        info!(
            model = %config.model,
            language = %config.language,
            listen = %config.listen,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Every stage bound must be at least one second.
    fn check_timeouts(&self) -> Result<(), ConfigError> {
        let bounds = [
            ("upload_timeout_secs", self.upload_timeout_secs),
            ("generation_timeout_secs", self.generation_timeout_secs),
            ("synthesis_timeout_secs", self.synthesis_timeout_secs),
        ];
        match bounds.iter().find(|(_, secs)| *secs == 0) {
            Some((name, _)) => Err(ConfigError::new(format!(
                "{} must be greater than zero",
                name
            ))),
            None => Ok(()),
        }
    }

    /// Replace the listen address, e.g. from a command-line flag.
    pub fn with_listen(mut self, listen: SocketAddr) -> Self {
        self.listen = listen;
        self
    }

    /// Bound on the upload stage.
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Bound on the generation stage.
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Bound on the synthesis stage.
    pub fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }

    /// The pipeline settings derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the pipeline settings cannot be built.
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        PipelineConfig::builder()
            .language(self.language.as_str())
            .scratch_dir(
                self.scratch_dir
                    .clone()
                    .unwrap_or_else(std::env::temp_dir),
            )
            .upload_timeout(self.upload_timeout())
            .generation_timeout(self.generation_timeout())
            .synthesis_timeout(self.synthesis_timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid pipeline settings: {}", e)))
    }
}

/// First non-blank key among [`API_KEY_VARS`].
fn resolve_api_key(env: &HashMap<String, String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| env.get(*var))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
