//! Chat Bubble - Main Library
//!
//! An interactive chat message bubble: the visual unit for one message plus the
//! small amount of local state needed to edit it, delete it, and show its
//! delivery status.
//!
//! # Module Structure
//!
//! - **`shared`** - Toolkit-independent types
//!   - `ChatMessage`, `DeliveryStatus`, `ImageRef`
//!   - `BubbleConfig` and its builder
//!   - Error types
//!
//! - **`egui_app`** - Bubble state machines and egui rendering
//!   - Ownership resolver, action menu, delete sequencer, status presenter
//!   - Collaborator traits (identity, conversation store, notifications,
//!     time formatting, animation)
//!   - In-memory conversation store and a demo binary
//!
//! # Usage
//!
//! ```rust
//! use chat_bubble::egui_app::messaging::{
//!     BubbleAction, BubbleContext, ClockFormatter, ImmediateAnimation,
//!     InMemoryConversationStore, MessageBubble, StaticIdentity, Toasts,
//! };
//! use chat_bubble::shared::{BubbleConfig, ChatMessage, DeliveryStatus};
//! use uuid::Uuid;
//!
//! let me = Uuid::new_v4();
//! let message = ChatMessage::text(me, "hi").with_status(DeliveryStatus::Sent);
//!
//! let identity = StaticIdentity(Some(me));
//! let store = InMemoryConversationStore::new();
//! let toasts = Toasts::default();
//! let clock = ClockFormatter::new("%H:%M");
//! let ctx = BubbleContext {
//!     identity: &identity,
//!     store: &store,
//!     notifier: &toasts,
//!     clock: &clock,
//!     animation: &ImmediateAnimation,
//! };
//!
//! let mut bubble = MessageBubble::new(&message, BubbleConfig::default());
//! bubble.handle(BubbleAction::ToggleMenu, &message, &ctx);
//! assert!(bubble.view(&message, &ctx).menu.unwrap().open);
//! ```
//!
//! # Thread Safety
//!
//! The bubble runs on the UI thread. Its state is owned by one instance and is
//! not shared; only the in-memory store crosses threads to simulate latency.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
