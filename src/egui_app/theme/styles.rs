//! Theme Styling Functions
//!
//! Frame builders and the global style for the conversation screen.

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::MAIN_CHAT_BG;
    style.visuals.panel_fill = colors::MAIN_CHAT_BG;

    style.visuals.widgets.inactive.bg_fill = colors::BUTTON_SECONDARY;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);
    style.visuals.widgets.hovered.bg_fill = colors::BUTTON_PRIMARY_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for the scrolling message area
pub fn chat_area_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::MAIN_CHAT_BG)
        .inner_margin(egui::Margin::symmetric(12, 0))
}

/// Frame for the conversation header
pub fn chat_header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CHAT_HEADER_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the edit panel at the bottom
pub fn edit_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INPUT_BAR_BG)
        .stroke(Stroke::new(1.0, colors::INPUT_BAR_BORDER))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Bubble frame; the tail corner points at the author's side
pub fn bubble_frame(is_own_message: bool) -> egui::Frame {
    let (fill, tail_left, tail_right) = if is_own_message {
        (colors::BUBBLE_OUTGOING, 12, 4)
    } else {
        (colors::BUBBLE_INCOMING, 4, 12)
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::BUBBLE_BORDER))
        .corner_radius(CornerRadius {
            nw: tail_left,
            ne: tail_right,
            sw: 12,
            se: 12,
        })
        .inner_margin(egui::Margin::symmetric(12, 8))
}
