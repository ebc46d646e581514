//! Input validation.

use bardic_core::{ImageFormat, Prompt, UploadedAsset};
use bardic_error::ValidationError;
use derive_getters::Getters;

/// An image whose format has been derived and confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedImage {
    asset: UploadedAsset,
    format: ImageFormat,
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedInput {
    prompt: Prompt,
    image: Option<ValidatedImage>,
}

/// Check the prompt, then the image if one was supplied.
///
/// Pure: no files are written and nothing is sent anywhere.
///
/// # Errors
///
/// Returns a [`ValidationError`] for an empty prompt or an image whose name
/// or content is not an accepted image type.
///
/// # Examples
///
/// ```
/// use bardic_pipeline::validate;
///
/// let input = validate("Write a haiku about the ocean", None).unwrap();
/// assert!(input.image().is_none());
///
/// assert!(validate("  ", None).is_err());
/// ```
pub fn validate(
    prompt: impl Into<String>,
    image: Option<UploadedAsset>,
) -> Result<ValidatedInput, ValidationError> {
    let prompt = Prompt::parse(prompt)?;

    let image = match image {
        Some(asset) => {
            let format = asset.format()?;
            Some(ValidatedImage { asset, format })
        }
        None => None,
    };

    Ok(ValidatedInput { prompt, image })
}
