//! Messaging UI Components
//!
//! egui drawing code for the messaging interface.

pub mod message_bubble;
pub mod message_list;
pub mod toast_bar;
