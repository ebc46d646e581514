//! Uploaded images and the handles the generation service returns for them.

use bardic_error::{ValidationError, ValidationErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Image formats accepted by the file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG (`.jpg`, `.jpeg`)
    Jpeg,
    /// PNG (`.png`)
    Png,
}

impl ImageFormat {
    /// Extensions offered to the browser file picker.
    pub const PICKER_EXTENSIONS: &'static [&'static str] = &[".jpeg", ".jpg", ".png"];

    /// Media type declared to the upload endpoint.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Suffix for the staged temporary file, including the dot.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => ".jpg",
            ImageFormat::Png => ".png",
        }
    }

    /// Map a file extension (without dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Detect the format from leading magic bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bardic_core::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::sniff(b"GIF89a"), None);
    /// ```
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
        const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

        if bytes.starts_with(JPEG) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(PNG) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }
}

/// Raw bytes and original file name from the browser's file picker.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UploadedAsset {
    /// File name as supplied by the browser
    filename: String,
    /// File content
    bytes: Vec<u8>,
}

impl UploadedAsset {
    /// Wrap an upload without inspecting it.
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Derive the image format from the file name and confirm the content agrees.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name has no extension, the
    /// extension is not an accepted image type, the file is empty, or the
    /// content's magic bytes disagree with the extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use bardic_core::{ImageFormat, UploadedAsset};
    ///
    /// let png = UploadedAsset::new("cat.PNG", b"\x89PNG\r\n\x1a\n....".to_vec());
    /// assert_eq!(png.format().unwrap(), ImageFormat::Png);
    ///
    /// let lying = UploadedAsset::new("cat.jpg", b"\x89PNG\r\n\x1a\n....".to_vec());
    /// assert!(lying.format().is_err());
    /// ```
    pub fn format(&self) -> Result<ImageFormat, ValidationError> {
        let ext = match self.filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
            _ => {
                return Err(ValidationError::new(ValidationErrorKind::MissingExtension(
                    self.filename.clone(),
                )));
            }
        };

        let declared = ImageFormat::from_extension(ext).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::UnsupportedImageType(ext.to_string()))
        })?;

        if self.bytes.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyAsset(
                self.filename.clone(),
            )));
        }

        match ImageFormat::sniff(&self.bytes) {
            Some(detected) if detected == declared => Ok(declared),
            detected => Err(ValidationError::new(ValidationErrorKind::ContentMismatch {
                declared: declared.mime_type().to_string(),
                detected: detected
                    .map(|f| f.mime_type().to_string())
                    .unwrap_or_else(|| "unrecognized".to_string()),
            })),
        }
    }
}

/// Opaque reference to media already uploaded to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RemoteAssetHandle {
    /// URI used to reference the file inside a conversation turn
    uri: String,
    /// Service-side identity, e.g. `files/abc123`
    name: String,
    /// Media type the file was declared with
    mime_type: String,
}

impl RemoteAssetHandle {
    /// Creates a handle from the upload response fields.
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}
