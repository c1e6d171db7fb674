//! Shared Module
//!
//! This module contains the types that do not depend on the UI toolkit: the
//! message model, configuration, and error types. Everything here is
//! serializable or plain data and can be used from tests without egui.

/// Messaging types
pub mod messaging;

/// Shared error types
pub mod error;

/// Bubble configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use messaging::{ChatMessage, DeliveryStatus, ImageRef};
pub use error::BubbleError;
pub use config::{BubbleConfig, BubbleConfigBuilder, ConfigError};
