//! Generation engine contract.

use async_trait::async_trait;
use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, RemoteAssetHandle};
use bardic_error::{AssetUploadError, GenerationError};
use std::path::Path;

/// A remote engine that accepts uploaded media and one conversation turn.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Upload a local file, returning a handle usable inside a turn.
    async fn upload(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<RemoteAssetHandle, AssetUploadError>;

    /// Open a session seeded with `turn` and generate one reply.
    async fn generate(
        &self,
        turn: &ConversationTurn,
        config: &GenerationConfig,
    ) -> Result<GeneratedText, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}
