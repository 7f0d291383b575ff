use crate::components::price_chart;
use crate::theme::*;
use crate::utils::{cmd_button, nav_link, star_row};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use lumina_app_core::router::Params;
use lumina_app_core::viewmodel::product_details_vm;
use lumina_app_core::{AppCommand, StoreApp};

const INFO_CELLS: [(&str, &str); 2] = [
    ("Free Shipping", "On all orders over $100"),
    ("2 Year Warranty", "Full coverage included"),
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut StoreApp, params: &Params) {
    let id = params.get("id").cloned().unwrap_or_default();
    let Some(vm) = product_details_vm(core.catalog(), &id) else {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            flex_grow: 1.0,
            justify_content: Some(taffy::JustifyContent::Center),
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("Product not found")
                    .size(20.0)
                    .strong()
                    .color(COL_TEXT),
            );
            if tui.ui(|ui| nav_link(ui, "Back to Shop", true)).clicked() {
                core.dispatch(AppCommand::Navigate("/shop".to_string()));
            }
        });
        return;
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(14.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        if tui
            .ui(|ui| nav_link(ui, "← Back to Catalog", false))
            .clicked()
        {
            core.dispatch(AppCommand::Navigate("/shop".to_string()));
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(24.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            align_items: Some(taffy::AlignItems::Start),
            ..Default::default()
        })
        .add(|tui| {
            // Image block
            tui.style(taffy::Style {
                size: taffy::Size {
                    width: length(320.0),
                    height: length(320.0),
                },
                flex_shrink: 0.0,
                ..Default::default()
            })
            .ui(|ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 12.0, COL_ACCENT_SOFT);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    vm.product.category.label(),
                    egui::FontId::proportional(16.0),
                    COL_ACCENT,
                );
            });

            // Info column
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(vm.product.category.label().to_uppercase())
                        .size(11.0)
                        .strong()
                        .color(COL_ACCENT),
                );
                tui.label(
                    egui::RichText::new(&vm.product.name)
                        .size(24.0)
                        .strong()
                        .color(COL_TEXT),
                );

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(10.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(&vm.price_label)
                            .size(22.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                    tui.ui(|ui| star_row(ui, vm.full_stars));
                    tui.label(
                        egui::RichText::new(&vm.reviews_label)
                            .size(12.0)
                            .color(COL_TEXT_DIM),
                    );
                });

                tui.label(
                    egui::RichText::new(&vm.product.description)
                        .size(14.0)
                        .color(COL_TEXT_DIM),
                );

                tui.label(
                    egui::RichText::new("Key Features:")
                        .size(14.0)
                        .strong()
                        .color(COL_TEXT),
                );
                for feature in &vm.product.features {
                    tui.label(
                        egui::RichText::new(format!("• {feature}"))
                            .size(13.0)
                            .color(COL_TEXT_DIM),
                    );
                }

                if tui
                    .ui(|ui| cmd_button(ui, "ADD TO CART", "primary", true))
                    .clicked()
                {
                    core.dispatch(AppCommand::AddToCart(vm.product.id.clone()));
                }

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(10.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    for (title, desc) in INFO_CELLS {
                        info_cell(&mut *tui, title, desc);
                    }
                });
            });
        });

        // Price trend
        tui.label(
            egui::RichText::new("Price Trend History")
                .size(16.0)
                .strong()
                .color(COL_TEXT),
        );
        tui.style(taffy::Style {
            size: taffy::Size {
                width: percent(1.),
                height: length(224.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .ui(|ui| price_chart::draw(ui, &vm.chart));
        tui.label(
            egui::RichText::new("Historical pricing data for the last 6 months.")
                .size(11.0)
                .color(COL_TEXT_DIM),
        );
    });
}

fn info_cell<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, desc: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        padding: length(12.0),
        gap: length(2.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0)
            .with_corner_radius(8.0),
        |tui| {
            tui.label(
                egui::RichText::new(title)
                    .size(13.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(egui::RichText::new(desc).size(11.0).color(COL_TEXT_DIM));
        },
    );
}
