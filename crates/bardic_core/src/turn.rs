//! The single conversation turn sent to the generation engine.

use crate::{Prompt, RemoteAssetHandle};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Author of a turn. Every turn Bardic sends is the user's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
}

/// One part of a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Reference to previously uploaded media.
    File {
        /// Media type the file was uploaded with
        mime_type: String,
        /// URI returned by the upload endpoint
        uri: String,
    },
    /// Plain text.
    Text(String),
}

/// Ordered parts making up exactly one user turn.
///
/// Media always precedes the instruction text.
///
/// # Examples
///
/// ```
/// use bardic_core::{ConversationTurn, Part, Prompt, RemoteAssetHandle, Role};
///
/// let prompt = Prompt::parse("Describe this photo").unwrap();
/// let handle = RemoteAssetHandle::new("https://files/abc", "files/abc", "image/jpeg");
/// let turn = ConversationTurn::user(&prompt, Some(&handle));
///
/// assert_eq!(*turn.role(), Role::User);
/// assert!(matches!(turn.parts()[0], Part::File { .. }));
/// assert_eq!(turn.parts()[1], Part::Text("Describe this photo".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ConversationTurn {
    /// Author of the turn
    role: Role,
    /// Parts in send order
    parts: Vec<Part>,
}

impl ConversationTurn {
    /// Build the user turn for a prompt and optional uploaded image.
    pub fn user(prompt: &Prompt, asset: Option<&RemoteAssetHandle>) -> Self {
        let mut parts = Vec::with_capacity(2);
        if let Some(handle) = asset {
            parts.push(Part::File {
                mime_type: handle.mime_type().clone(),
                uri: handle.uri().clone(),
            });
        }
        parts.push(Part::Text(prompt.as_str().to_string()));

        Self {
            role: Role::User,
            parts,
        }
    }

    /// Builds a text-only user turn.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Whether the turn references uploaded media.
    pub fn has_media(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, Part::File { .. }))
    }
}
