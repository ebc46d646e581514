//! Stages an uploaded image for the generation service.

use crate::ValidatedImage;
use bardic_core::RemoteAssetHandle;
use bardic_error::{AssetUploadError, AssetUploadErrorKind};
use bardic_interface::GenerationService;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Writes the image to a scoped temp file and uploads it.
///
/// The temp file is removed when staging returns, whether the upload
/// succeeded or not.
#[derive(Debug, Clone)]
pub struct AssetStager {
    scratch_dir: PathBuf,
}

impl AssetStager {
    /// Stage files under `scratch_dir`.
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Persist and upload one image.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetUploadError`] if the temp file cannot be written or the
    /// service rejects the upload.
    #[instrument(skip_all, fields(filename = %image.asset().filename(), format = %image.format()))]
    pub async fn stage<G>(
        &self,
        service: &G,
        image: &ValidatedImage,
    ) -> Result<RemoteAssetHandle, AssetUploadError>
    where
        G: GenerationService + ?Sized,
    {
        let format = *image.format();

        let staged = tempfile::Builder::new()
            .prefix("bardic-upload-")
            .suffix(format.file_suffix())
            .tempfile_in(&self.scratch_dir)
            .map_err(|e| AssetUploadError::new(AssetUploadErrorKind::Io(e.to_string())))?;

        tokio::fs::write(staged.path(), image.asset().bytes())
            .await
            .map_err(|e| AssetUploadError::new(AssetUploadErrorKind::Io(e.to_string())))?;

        debug!(path = %staged.path().display(), "Staged upload");

        let result = service.upload(staged.path(), format.mime_type()).await;

        if let Err(e) = staged.close() {
            warn!(error = %e, "Failed to remove staged upload");
        }

        let handle = result?;
        info!(uri = %handle.uri(), "File uploaded successfully");
        Ok(handle)
    }
}
