//! Messaging Module
//!
//! Data structures for the message a bubble displays:
//!
//! - `ChatMessage` - A message in a conversation
//! - `DeliveryStatus` - Outbound delivery progress
//! - `ImageRef` - Media attached to a message
//!
//! # Usage
//!
//! ```rust
//! use chat_bubble::shared::messaging::{ChatMessage, DeliveryStatus};
//! ```

pub mod message;

pub use message::{ChatMessage, DeliveryStatus, ImageRef};
