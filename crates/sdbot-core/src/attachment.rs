//! Attachment card model matching the chat platform's rich-display payload.

use serde::{Deserialize, Serialize};

/// Brand color applied to every card regardless of response kind.
pub const BRAND_COLOR: &str = "#8E44AD";

/// One labeled value inside a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl AttachmentField {
    /// Field rendered side by side with its neighbors.
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }
}

/// A titled, colored group of labeled fields posted as a rich attachment.
///
/// Built fresh per response and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

impl Attachment {
    /// Card carrying only labeled fields under a title.
    pub fn titled(title: impl Into<Option<String>>, fields: Vec<AttachmentField>) -> Self {
        Self {
            title: title.into(),
            text: None,
            color: BRAND_COLOR.to_string(),
            fields,
            mrkdwn_in: Vec::new(),
        }
    }

    /// Card carrying a markdown body instead of fields.
    pub fn markdown(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: Some(text.into()),
            color: BRAND_COLOR.to_string(),
            fields: Vec::new(),
            mrkdwn_in: vec!["text".to_string()],
        }
    }
}
