use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use lumina_app_core::viewmodel::ChatVm;
use lumina_app_core::{AppCommand, StoreApp};

/// Widget-local state: open flag and the composer text. Neither is shared
/// with the rest of the application.
#[derive(Default)]
pub struct ChatPanelState {
    pub open: bool,
    pub input: String,
}

pub fn draw(ctx: &egui::Context, state: &mut ChatPanelState, vm: &ChatVm, core: &mut StoreApp) {
    egui::Area::new(egui::Id::new("chat-toggle"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
        .show(ctx, |ui| {
            let label = if state.open { "✕" } else { "AI" };
            let button = egui::Button::new(
                egui::RichText::new(label).size(16.0).strong().color(COL_SURFACE),
            )
            .min_size(egui::vec2(48.0, 48.0))
            .fill(COL_ACCENT);
            if ui.add(button).clicked() {
                state.open = !state.open;
            }
        });

    if !state.open {
        return;
    }

    egui::Window::new("Lumina AI")
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -80.0))
        .fixed_size(egui::vec2(340.0, 440.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Always here to help")
                    .size(11.0)
                    .color(COL_TEXT_DIM),
            );
            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .max_height(320.0)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for line in &vm.lines {
                        let (tag, color) = if line.from_user {
                            ("YOU", COL_ACCENT)
                        } else {
                            ("LUMINA AI", COL_TEXT_DIM)
                        };
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(tag).size(10.0).strong().color(color));
                            ui.label(
                                egui::RichText::new(&line.time_label)
                                    .size(10.0)
                                    .color(COL_TEXT_DIM),
                            );
                        });
                        ui.label(egui::RichText::new(&line.text).size(13.0).color(COL_TEXT));
                        ui.add_space(6.0);
                    }

                    if vm.pending {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(
                                egui::RichText::new("Thinking...")
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            );
                        });
                    }
                });

            ui.separator();

            let mut send: Option<String> = None;
            ui.horizontal(|ui| {
                let edit = ui.add_enabled(
                    !vm.pending,
                    egui::TextEdit::singleline(&mut state.input)
                        .hint_text("Ask for recommendations...")
                        .desired_width(220.0),
                );
                let submitted =
                    edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !state.input.trim().is_empty() && !vm.pending;
                let clicked = cmd_button(ui, "SEND", "primary", can_send).clicked();
                if can_send && (submitted || clicked) {
                    send = Some(state.input.trim().to_string());
                }
            });

            if let Some(text) = send {
                state.input.clear();
                core.dispatch(AppCommand::SendChatMessage(text));
            }
        });
}
