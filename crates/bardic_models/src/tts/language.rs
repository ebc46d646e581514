//! Languages the translate TTS endpoint speaks.

/// Language tags accepted by [`GoogleTranslateTts`](super::GoogleTranslateTts).
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW",
];

/// Case-insensitive membership check.
///
/// # Examples
///
/// ```
/// use bardic_models::is_supported_language;
///
/// assert!(is_supported_language("en"));
/// assert!(is_supported_language("zh-cn"));
/// assert!(!is_supported_language("klingon"));
/// ```
pub fn is_supported_language(tag: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|l| l.eq_ignore_ascii_case(tag))
}
