//! Shared Error Types
//!
//! This module defines the error types produced at the bubble's collaborator
//! boundaries: the animation host, the conversation store, and message decoding.
//!
//! # Error Categories
//!
//! - `AnimationError` - The exit animation could not be started
//! - `StoreError` - The conversation store rejected an operation
//! - `NotFound` - The store has no message with the given id
//! - `Disconnected` - A pending store reply was dropped before it arrived
//! - `SerializationError` - JSON decoding failures
//!
//! # Usage
//!
//! ```rust
//! use chat_bubble::shared::error::BubbleError;
//!
//! let error = BubbleError::store("backend unavailable");
//! assert!(error.to_string().contains("backend unavailable"));
//! ```
//!
//! None of these errors cross the bubble's public surface: the bubble turns them
//! into user notifications.
use thiserror::Error;
use uuid::Uuid;

/// Errors reported by bubble collaborators
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BubbleError {
    /// The render layer refused to start the exit animation
    #[error("Animation error: {message}")]
    AnimationError {
        /// Human-readable error message
        message: String,
    },

    /// The conversation store failed an operation
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// No message with this id exists in the store
    #[error("Message not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: Uuid,
    },

    /// The reply channel for a pending operation was closed
    #[error("Store reply channel disconnected")]
    Disconnected,

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl BubbleError {
    /// Create a new animation error
    pub fn animation(message: impl Into<String>) -> Self {
        Self::AnimationError {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for BubbleError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
