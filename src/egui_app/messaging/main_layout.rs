//! Main Conversation Layout
//!
//! Header with the viewer's identity, notifications, the edit panel when an
//! edit was handed over, and the message list.

use eframe::egui;
use super::components::{message_list, toast_bar};
use super::state::ConversationState;
use crate::egui_app::messaging::ports::{IdentityProvider, TimeFormatter};
use crate::egui_app::theme::{colors, styles};

/// Render the conversation view
pub fn render_conversation_view(ui: &mut egui::Ui, state: &mut ConversationState) {
    render_header(ui, state);
    toast_bar::render(ui, &state.toasts);

    if let Some(target) = state.sync_edit() {
        egui::TopBottomPanel::bottom("edit_panel")
            .frame(styles::edit_panel_frame())
            .show_inside(ui, |ui| {
                ui.colored_label(colors::TEXT_DARK, format!("Editing message from {}", state.clock.format(&target.created_at)));
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut state.edit_input)
                            .desired_width(ui.available_width() - 140.0),
                    );
                    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Save").clicked() || submitted {
                        state.save_edit();
                    }
                    if ui.button("Cancel").clicked() {
                        state.cancel_edit();
                    }
                });
            });
    }

    styles::chat_area_frame().show(ui, |ui| {
        message_list::render(ui, state);
    });
}

fn render_header(ui: &mut egui::Ui, state: &ConversationState) {
    let viewer = match state.identity.current_user_id() {
        Some(id) => format!("Signed in as {}", id),
        None => "Identity loading…".to_string(),
    };

    styles::chat_header_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Conversation").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(colors::ICONS, viewer);
            });
        });
    });
}
