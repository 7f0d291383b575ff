use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use lumina_app_core::viewmodel::CartVm;
use lumina_app_core::{AppCommand, StoreApp};

/// Slide-over cart. The view model is a snapshot, so commands dispatch
/// straight back into the core while drawing.
pub fn draw(ui: &mut egui::Ui, vm: &CartVm, core: &mut StoreApp) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Shopping Cart")
                .size(16.0)
                .strong()
                .color(COL_TEXT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(egui::RichText::new("✕").size(14.0)).frame(false))
                .clicked()
            {
                core.dispatch(AppCommand::SetCartOpen(false));
            }
        });
    });
    ui.separator();

    if vm.is_empty {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Your cart is empty.").color(COL_TEXT_DIM));
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("Continue Shopping").color(COL_ACCENT),
                    )
                    .frame(false),
                )
                .clicked()
            {
                core.dispatch(AppCommand::SetCartOpen(false));
            }
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 150.0).max(120.0))
        .show(ui, |ui| {
            for line in &vm.lines {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&line.name)
                            .size(14.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&line.line_total_label)
                                .size(14.0)
                                .color(COL_TEXT),
                        );
                    });
                });
                ui.label(
                    egui::RichText::new(line.category_label)
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );

                ui.horizontal(|ui| {
                    // The minus button stops at a quantity of 1; removal is
                    // its own affordance.
                    if ui
                        .add_enabled(line.can_decrement, egui::Button::new("−"))
                        .clicked()
                    {
                        core.dispatch(AppCommand::UpdateQuantity(
                            line.id.clone(),
                            line.quantity - 1,
                        ));
                    }
                    ui.label(egui::RichText::new(line.quantity.to_string()).strong());
                    if ui.add(egui::Button::new("+")).clicked() {
                        core.dispatch(AppCommand::UpdateQuantity(
                            line.id.clone(),
                            line.quantity + 1,
                        ));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new("Remove").size(12.0).color(COL_DANGER),
                                )
                                .frame(false),
                            )
                            .clicked()
                        {
                            core.dispatch(AppCommand::RemoveFromCart(line.id.clone()));
                        }
                    });
                });
                ui.separator();
            }
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Subtotal").size(14.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(&vm.subtotal_label)
                    .size(14.0)
                    .strong()
                    .color(COL_TEXT),
            );
        });
    });
    if vm.free_shipping {
        ui.label(
            egui::RichText::new("Free shipping applied.")
                .size(11.0)
                .color(COL_SUCCESS),
        );
    } else {
        ui.label(
            egui::RichText::new("Shipping and taxes calculated at checkout.")
                .size(11.0)
                .color(COL_TEXT_DIM),
        );
    }
    ui.add_space(4.0);
    // Checkout is out of scope; the button is the visual anchor only.
    let _ = cmd_button(ui, "CHECKOUT", "primary", true);
}
