//! Toast Bar Component
//!
//! Shows pending notifications with a dismiss button.

use eframe::egui;
use crate::egui_app::messaging::ports::Toasts;
use crate::egui_app::theme::colors;

/// Seconds a toast stays visible
const TOAST_LIFETIME_SECS: i64 = 6;

pub fn render(ui: &mut egui::Ui, toasts: &Toasts) {
    toasts.expire(TOAST_LIFETIME_SECS);
    if toasts.is_empty() {
        return;
    }

    egui::Frame::new()
        .fill(colors::ERROR)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    for message in toasts.messages() {
                        ui.colored_label(colors::TEXT_LIGHT, message);
                    }
                });
                if ui.small_button("✕").clicked() {
                    toasts.drain();
                }
            });
        });

    // Keep expiring without input
    ui.ctx().request_repaint_after(std::time::Duration::from_secs(1));
}
