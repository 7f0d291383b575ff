use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use lumina_app_core::viewmodel::ProductCardVm;

pub struct ProductCardResponse {
    pub open: bool,
    pub add: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ProductCardVm) -> ProductCardResponse {
    let mut resp = ProductCardResponse {
        open: false,
        add: false,
    };

    let response = tui
        .id(egui_taffy::tid(("product-card", &vm.id)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: taffy::Size {
                width: length(230.0),
                height: length(236.0),
            },
            flex_shrink: 0.0,
            gap: length(0.0),
            ..Default::default()
        })
        .bg_clickable(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0)
                .with_corner_radius(8.0),
            |tui| {
                // Image placeholder block
                tui.style(taffy::Style {
                    size: taffy::Size {
                        width: percent(1.),
                        height: length(110.0),
                    },
                    flex_shrink: 0.0,
                    ..Default::default()
                })
                .ui(|ui| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(rect, 0.0, COL_ACCENT_SOFT);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        vm.category_label,
                        egui::FontId::proportional(12.0),
                        COL_ACCENT,
                    );
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    padding: length(10.0),
                    gap: length(4.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(vm.category_label)
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                    tui.label(
                        egui::RichText::new(&vm.name)
                            .size(14.0)
                            .strong()
                            .color(COL_TEXT),
                    );

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        justify_content: Some(taffy::JustifyContent::SpaceBetween),
                        align_items: Some(taffy::AlignItems::Center),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new(&vm.price_label)
                                .size(15.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(&vm.rating_label)
                                .size(11.0)
                                .color(COL_RATING),
                        );
                    });

                    if tui
                        .ui(|ui| cmd_button(ui, "ADD TO CART", "outline", true))
                        .clicked()
                    {
                        resp.add = true;
                    }
                });
            },
        );

    if response.clicked() {
        resp.open = true;
    }
    resp
}
