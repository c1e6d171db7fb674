//! Theme Module
//!
//! Color constants and frame builders for the conversation screen.
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::bubble_frame(true).show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "hi");
//! });
//! ```

pub mod colors;
pub mod styles;
