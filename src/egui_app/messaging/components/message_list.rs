//! Message List Component
//!
//! Displays the conversation's bubbles and routes their actions back to state.

use eframe::egui;
use chrono::{Local, NaiveDate};
use crate::egui_app::messaging::state::ConversationState;
use crate::egui_app::theme::colors;
use super::message_bubble;

/// Render the message list
pub fn render(ui: &mut egui::Ui, state: &mut ConversationState) {
    let views = state.views();
    let mut pending = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if views.is_empty() {
                render_empty_state(ui);
            } else {
                let mut last_date: Option<NaiveDate> = None;

                for (message, view) in &views {
                    let message_date = message.created_at.with_timezone(&Local).date_naive();
                    if last_date != Some(message_date) {
                        render_date_separator(ui, message_date);
                        last_date = Some(message_date);
                    }

                    for action in message_bubble::render(ui, view) {
                        pending.push((message.clone(), action));
                    }
                }
            }

            ui.add_space(8.0);
        });

    // Fade-outs need frames even without input
    if views.iter().any(|(_, view)| view.deleting) {
        ui.ctx().request_repaint();
    }

    for (message, action) in pending {
        state.dispatch(&message, action);
    }
}

/// Render empty state when no messages
fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::TEXT_SECONDARY, "No messages yet");
    });
}

/// Render a date separator
fn render_date_separator(ui: &mut egui::Ui, date: NaiveDate) {
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.add(egui::Separator::default().horizontal());
        ui.colored_label(colors::TEXT_SECONDARY, date.format("%B %-d, %Y").to_string());
        ui.add(egui::Separator::default().horizontal());
    });

    ui.add_space(16.0);
}
