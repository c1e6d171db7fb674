//! Messaging Module
//!
//! Interactive message bubble: ownership check, Edit/Delete menu, animated
//! delete sequencing, and delivery status presentation.
//!
//! The state machines are headless and live in this module; `components`
//! holds the egui drawing code.

pub mod ports;
pub mod ownership;
pub mod action_menu;
pub mod delete_sequencer;
pub mod status_presenter;
pub mod bubble;
pub mod store;
pub mod state;
pub mod components;
pub mod main_layout;

pub use bubble::{Alignment, BubbleAction, BubbleView, MenuView, MessageBubble};
pub use delete_sequencer::DeletePhase;
pub use ports::{
    AnimationHost, BubbleContext, ClockFormatter, ConversationStore, IdentityProvider,
    ImmediateAnimation, NotificationSink, PendingCommit, StaticIdentity, TimeFormatter, Toasts,
};
pub use status_presenter::{Emphasis, StatusBadge, StatusIcon};
pub use store::InMemoryConversationStore;
pub use state::ConversationState;
