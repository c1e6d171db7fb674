//! Message Bubble Component
//!
//! Draws a [`BubbleView`] and reports the actions the user triggered this frame.
//! The delete fade is driven here; once it has fully played out the component
//! emits `BubbleAction::AnimationComplete`.

use eframe::egui;
use crate::egui_app::messaging::bubble::{Alignment, BubbleAction, BubbleView, MenuView};
use crate::egui_app::messaging::status_presenter::{Emphasis, StatusBadge};
use crate::egui_app::theme::{colors, styles};

/// Render a message bubble
pub fn render(ui: &mut egui::Ui, view: &BubbleView) -> Vec<BubbleAction> {
    let mut actions = Vec::new();
    let is_own_message = view.alignment == Alignment::Outgoing;

    let align = if is_own_message { egui::Align::RIGHT } else { egui::Align::LEFT };

    let exit_id = egui::Id::new(("bubble_exit", view.message_id));
    let progress = ui
        .ctx()
        .animate_bool_with_time(exit_id, view.deleting, view.exit_duration.as_secs_f32());

    if view.deleting && progress >= 1.0 {
        let done_id = exit_id.with("done");
        let already_reported = ui.ctx().data(|d| d.get_temp::<bool>(done_id)).unwrap_or(false);
        if !already_reported {
            ui.ctx().data_mut(|d| d.insert_temp(done_id, true));
            actions.push(BubbleAction::AnimationComplete);
        }
    }

    ui.scope(|ui| {
        ui.multiply_opacity(1.0 - progress);

        ui.with_layout(egui::Layout::top_down(align), |ui| {
            // Limit bubble width
            let max_width = ui.available_width() * view.max_width_ratio;

            ui.allocate_ui_with_layout(
                egui::vec2(max_width, 0.0),
                egui::Layout::top_down(align),
                |ui| {
                    styles::bubble_frame(is_own_message)
                        .show(ui, |ui| {
                            render_content(ui, view);

                            // Timestamp, edited marker, status, menu trigger
                            ui.horizontal(|ui| {
                                ui.colored_label(colors::TIMESTAMP, view.time_label.as_str());

                                if view.edited {
                                    ui.label(
                                        egui::RichText::new("(edited)")
                                            .italics()
                                            .small()
                                            .color(colors::TEXT_SECONDARY),
                                    );
                                }

                                if let Some(badge) = view.status {
                                    render_status(ui, badge);
                                }

                                if let Some(menu) = view.menu {
                                    if ui
                                        .add_enabled(menu.can_edit, egui::Button::new("⋯").small().frame(false))
                                        .on_hover_text("Message actions")
                                        .clicked()
                                    {
                                        actions.push(BubbleAction::ToggleMenu);
                                    }
                                }
                            });

                            if let Some(menu) = view.menu.filter(|m| m.open) {
                                render_menu(ui, menu, &mut actions);
                            }
                        });
                },
            );
        });
    });

    ui.add_space(4.0);
    actions
}

fn render_content(ui: &mut egui::Ui, view: &BubbleView) {
    if let Some(image) = &view.image {
        let label = image.alt.as_deref().unwrap_or("Message attachment");
        ui.hyperlink_to(format!("🖼 {}", label), image.url.as_str());
    }

    if let Some(text) = &view.text {
        ui.label(egui::RichText::new(text).color(colors::TEXT_PRIMARY));
    }

    if view.empty {
        ui.label(
            egui::RichText::new("(empty message)")
                .italics()
                .color(colors::TEXT_SECONDARY),
        );
    }
}

fn render_status(ui: &mut egui::Ui, badge: StatusBadge) {
    let color = match badge.emphasis {
        Emphasis::Muted => colors::TEXT_SECONDARY,
        Emphasis::Accent => colors::ACCENT,
    };
    ui.colored_label(color, badge.icon.glyph());
}

fn render_menu(ui: &mut egui::Ui, menu: MenuView, actions: &mut Vec<BubbleAction>) {
    ui.add(egui::Separator::default().horizontal());
    ui.horizontal(|ui| {
        if ui.add_enabled(menu.can_edit, egui::Button::new("✏ Edit")).clicked() {
            actions.push(BubbleAction::Edit);
        }
        if ui
            .add_enabled(
                menu.can_delete,
                egui::Button::new(egui::RichText::new("🗑 Delete").color(colors::ERROR)),
            )
            .clicked()
        {
            actions.push(BubbleAction::Delete);
        }
        if ui.small_button("✕").clicked() {
            actions.push(BubbleAction::Dismiss);
        }
    });
}
