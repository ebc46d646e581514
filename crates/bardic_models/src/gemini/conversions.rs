//! Type conversions between Bardic and Gemini formats.

use super::dto::{Content, ContentPart, FileData, GenerateContentRequest, GenerateContentResponse};
use bardic_core::{ConversationTurn, GeneratedText, GenerationConfig, Part};
use bardic_error::{GenerationError, GenerationErrorKind};

/// Message sent on the session seeded with the user's turn.
pub const SESSION_TRIGGER: &str = "Generate content";

fn to_content(turn: &ConversationTurn) -> Content {
    let parts = turn
        .parts()
        .iter()
        .map(|part| match part {
            Part::File { mime_type, uri } => ContentPart {
                file_data: Some(FileData {
                    mime_type: mime_type.clone(),
                    file_uri: uri.clone(),
                }),
                ..Default::default()
            },
            Part::Text(text) => ContentPart {
                text: Some(text.clone()),
                ..Default::default()
            },
        })
        .collect();

    Content {
        role: turn.role().to_string(),
        parts,
    }
}

/// Build the request for a session whose history is `turn`.
pub fn to_generate_request(
    turn: &ConversationTurn,
    config: &GenerationConfig,
) -> GenerateContentRequest {
    let trigger = ConversationTurn::user_text(SESSION_TRIGGER);

    GenerateContentRequest {
        contents: vec![to_content(turn), to_content(&trigger)],
        generation_config: *config,
    }
}

/// Concatenate the text parts of the first candidate.
///
/// A candidate whose parts carry empty text yields empty output rather than an
/// error.
pub fn extract_text(
    response: &GenerateContentResponse,
) -> Result<GeneratedText, GenerationError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "empty response".to_string());
        return Err(GenerationError::new(GenerationErrorKind::NoCandidates(
            reason,
        )));
    };

    let parts = candidate
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();

    if parts.is_empty() {
        let reason = candidate
            .finish_reason
            .clone()
            .unwrap_or_else(|| "UNSPECIFIED".to_string());
        return Err(GenerationError::new(GenerationErrorKind::NoCandidates(
            format!("candidate has no parts (finish reason {})", reason),
        )));
    }

    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    Ok(GeneratedText::new(text))
}
