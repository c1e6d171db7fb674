//! Chat Message Data Structure
//!
//! Represents a message as the bubble receives it. The bubble never mutates a
//! message; the conversation store owns the canonical copy.

use crate::shared::error::BubbleError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Outbound delivery progress reported by the messaging backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Accepted by the server
    Sent,
    /// Reached the recipient's device
    Delivered,
    /// Opened by the recipient
    Read,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Sent => write!(f, "sent"),
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Read => write!(f, "read"),
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(DeliveryStatus::Sent),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "read" => Ok(DeliveryStatus::Read),
            other => Err(BubbleError::serialization(format!("unknown delivery status '{}'", other))),
        }
    }
}

/// Unknown status strings decode to `None` so they render nothing.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<DeliveryStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            tracing::debug!("[BUBBLE] Ignoring unknown delivery status '{}'", s);
            None
        }
    }))
}

/// Reference to displayable media attached to a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            width: None,
            height: None,
        }
    }
}

/// Represents a chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique message ID
    pub id: Uuid,
    /// User who sent the message
    pub sender_id: Uuid,
    /// Text content, if any
    #[serde(default)]
    pub text: Option<String>,
    /// Attached image, if any
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// Whether the message was edited after sending
    #[serde(default)]
    pub is_edited: bool,
    /// Delivery progress; only meaningful for the viewer's own messages
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<DeliveryStatus>,
}

impl ChatMessage {
    /// Create a new text message sent now
    pub fn text(sender_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            text: Some(text.into()),
            image: None,
            created_at: Utc::now(),
            is_edited: false,
            status: None,
        }
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn edited(mut self) -> Self {
        self.is_edited = true;
        self
    }

    /// Decode a message from the backend's JSON shape
    pub fn from_json(input: &str) -> Result<Self, BubbleError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Whether there is anything to show besides metadata
    pub fn has_content(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty()) || self.image.is_some()
    }
}
