//! Multipart form decoding.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use bardic_core::UploadedAsset;
use bardic_pipeline::PipelineRequest;
use tracing::debug;

/// Read the `prompt` and `image` fields of a form submission.
///
/// A file input left empty by the browser arrives as a part with no file
/// name and no bytes; it is treated as no image. Unknown fields are ignored.
///
/// # Errors
///
/// Returns the [`MultipartError`] when the body is malformed or exceeds the
/// body limit.
pub async fn read_request(mut multipart: Multipart) -> Result<PipelineRequest, MultipartError> {
    let mut request = PipelineRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "prompt" => request.prompt = field.text().await?,
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                debug!(filename = %filename, bytes = bytes.len(), "Received image");
                request.image = Some(UploadedAsset::new(filename, bytes.to_vec()));
            }
            other => debug!(field = %other, "Ignoring form field"),
        }
    }

    Ok(request)
}
