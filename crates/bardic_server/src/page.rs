//! HTML rendering for the form and its results.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bardic_core::{AUDIO_MIME_TYPE, ImageFormat};
use bardic_pipeline::Invocation;
use tracing::warn;

const TITLE: &str = "Gemini AI Blog Post Generator with Voice";
const INTRO: &str = "Generate an engaging blog post using AI by providing a prompt. \
Optionally, upload an image to enhance the result. Get the response in both text and audio!";

/// Status line shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Something succeeded, e.g. an upload
    Success(String),
    /// The invocation stopped
    Error(String),
}

/// One rendered page: the form plus whatever an invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    prompt: String,
    banners: Vec<Banner>,
    text: Option<String>,
    audio_src: Option<String>,
}

impl Page {
    /// A form showing only an error.
    pub fn with_banner(message: impl Into<String>) -> Self {
        Self {
            banners: vec![Banner::Error(message.into())],
            ..Self::default()
        }
    }

    /// Build the result page for a finished invocation.
    ///
    /// Consumes the audio artifact: its bytes are embedded in the page and
    /// the file is removed.
    pub async fn from_invocation(prompt: String, invocation: &mut Invocation) -> Self {
        let mut page = Page {
            prompt,
            ..Self::default()
        };

        if let Some(handle) = invocation.upload() {
            page.banners.push(Banner::Success(format!(
                "File uploaded successfully: {}",
                handle.uri()
            )));
        }

        page.text = invocation.text().map(|t| t.to_string());

        if let Some(audio) = invocation.take_audio() {
            match audio.into_bytes().await {
                Ok(bytes) => {
                    page.audio_src = Some(format!(
                        "data:{};base64,{}",
                        AUDIO_MIME_TYPE,
                        STANDARD.encode(bytes)
                    ));
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read audio artifact");
                    page.banners
                        .push(Banner::Error(format!("Could not read the audio: {}", e)));
                }
            }
        }

        if let Some(error) = invocation.error() {
            page.banners.push(Banner::Error(error.user_message()));
        }

        page
    }

    /// Status banners in display order.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Generated text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// `data:` URI of the embedded audio, if any.
    pub fn audio_src(&self) -> Option<&str> {
        self.audio_src.as_deref()
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", TITLE));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n<p>{}</p>\n", TITLE, INTRO));

        html.push_str(
            "<form method=\"post\" action=\"/generate\" enctype=\"multipart/form-data\">\n",
        );
        html.push_str(&format!(
            "<label for=\"image\">Upload an image (optional, e.g., JPEG, PNG)</label>\n\
             <input type=\"file\" id=\"image\" name=\"image\" accept=\"{}\">\n",
            ImageFormat::PICKER_EXTENSIONS.join(",")
        ));
        html.push_str(&format!(
            "<label for=\"prompt\">Enter your prompt</label>\n\
             <textarea id=\"prompt\" name=\"prompt\" rows=\"6\" \
             placeholder=\"Describe what you want the AI to generate.\">{}</textarea>\n",
            escape_html(&self.prompt)
        ));
        html.push_str("<button type=\"submit\">Generate</button>\n</form>\n");

        for banner in &self.banners {
            let (class, message) = match banner {
                Banner::Success(m) => ("success", m),
                Banner::Error(m) => ("error", m),
            };
            html.push_str(&format!(
                "<div class=\"banner {}\" role=\"status\">{}</div>\n",
                class,
                escape_html(message)
            ));
        }

        if let Some(text) = &self.text {
            html.push_str(&format!(
                "<h2>Generated Blog Post</h2>\n<div class=\"generated\" style=\"white-space: pre-wrap\">{}</div>\n",
                escape_html(text)
            ));
        }

        if let Some(src) = &self.audio_src {
            html.push_str(&format!(
                "<h2>Listen to the Response</h2>\n<audio controls src=\"{}\"></audio>\n",
                src
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escape text for use in HTML content and attribute values.
///
/// # Examples
///
/// ```
/// use bardic_server::escape_html;
///
/// assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
