//! egui Native Desktop App Module
//!
//! The interactive message bubble and the demo screen that hosts it.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs              - Module exports
//! ├── main.rs             - Demo binary entry point
//! ├── config.rs           - Environment-driven configuration
//! ├── messaging_demo.rs   - Seeded demo conversation
//! ├── theme/              - Colors and frames
//! └── messaging/          - Bubble state machines, collaborators, components
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the demo:
//! // cargo run --bin bubble_demo
//! ```

pub mod config;
pub mod messaging_demo;
pub mod theme;
pub mod messaging;

// Re-export commonly used types
pub use config::Config;
pub use messaging_demo::MessagingDemo;
pub use messaging::{BubbleAction, BubbleContext, BubbleView, MessageBubble};
