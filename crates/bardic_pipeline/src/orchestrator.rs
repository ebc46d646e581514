//! Builds the conversation turn and asks the engine for text.

use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, Prompt, RemoteAssetHandle};
use bardic_error::GenerationError;
use bardic_interface::GenerationService;
use tracing::{debug, instrument};

/// Issues exactly one generation call per invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOrchestrator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> GenerationOrchestrator<'a> {
    /// Generate with the given sampling parameters.
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Send `prompt`, preceded by the uploaded image if any, and return the text.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`GenerationError`] unchanged.
    #[instrument(skip_all, fields(provider = service.provider_name(), model = service.model_name(), has_media = asset.is_some()))]
    pub async fn generate<G>(
        &self,
        service: &G,
        prompt: &Prompt,
        asset: Option<&RemoteAssetHandle>,
    ) -> Result<GeneratedText, GenerationError>
    where
        G: GenerationService + ?Sized,
    {
        let turn = ConversationTurn::user(prompt, asset);
        let text = service.generate(&turn, self.config).await?;
        debug!(chars = text.as_str().chars().count(), "Generated text");
        Ok(text)
    }
}
