use crate::components::product_card;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use lumina_app_core::viewmodel::home_vm;
use lumina_app_core::{AppCommand, StoreApp};

const HERO_TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);

const VALUE_PROPS: [(&str, &str); 3] = [
    ("Curated Quality", "Every item is hand-picked for excellence."),
    ("Fast Shipping", "Free delivery on orders over $100."),
    ("Secure Checkout", "Bank-level encryption for your peace of mind."),
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut StoreApp) {
    let vm = home_vm(core.catalog());

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(16.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        // Hero
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            padding: length(36.0),
            gap: length(10.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new().with_background_color(COL_HERO),
            |tui| {
                tui.label(
                    egui::RichText::new("Future-Ready Lifestyle Essentials.")
                        .size(28.0)
                        .strong()
                        .color(COL_SURFACE),
                );
                tui.label(
                    egui::RichText::new(
                        "Curated tech, fashion, and home goods for the modern minimalist. \
                         Experience shopping reimagined with AI assistance.",
                    )
                    .size(14.0)
                    .color(HERO_TEXT_DIM),
                );

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(8.0),
                    ..Default::default()
                })
                .add(|tui| {
                    if tui
                        .ui(|ui| cmd_button(ui, "SHOP COLLECTION", "primary", true))
                        .clicked()
                    {
                        core.dispatch(AppCommand::Navigate("/shop".to_string()));
                    }
                    if tui
                        .ui(|ui| cmd_button(ui, "VIEW ELECTRONICS", "outline", true))
                        .clicked()
                    {
                        core.dispatch(AppCommand::Navigate(
                            "/shop?category=Electronics".to_string(),
                        ));
                    }
                });
            },
        );

        // Value props
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (title, desc) in VALUE_PROPS {
                value_prop_cell(&mut *tui, title, desc);
            }
        });

        // Featured products
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
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("Trending Now")
                        .size(20.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("Our most popular items this week.")
                        .size(12.0)
                        .color(COL_TEXT_DIM),
                );
            });
            if tui
                .ui(|ui| crate::utils::nav_link(ui, "View All", false))
                .clicked()
            {
                core.dispatch(AppCommand::Navigate("/shop".to_string()));
            }
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for card in &vm.featured {
                let resp = product_card::draw(&mut *tui, card);
                if resp.add {
                    core.dispatch(AppCommand::AddToCart(card.id.clone()));
                } else if resp.open {
                    core.dispatch(AppCommand::Navigate(format!("/product/{}", card.id)));
                }
            }
        });

        // Sale banner
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            padding: length(28.0),
            gap: length(8.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_ACCENT)
                .with_corner_radius(12.0),
            |tui| {
                tui.label(
                    egui::RichText::new("Smart Accessories Sale")
                        .size(20.0)
                        .strong()
                        .color(COL_SURFACE),
                );
                tui.label(
                    egui::RichText::new(
                        "Upgrade your daily carry with 20% off all electronic accessories \
                         this weekend.",
                    )
                    .size(13.0)
                    .color(COL_ACCENT_SOFT),
                );
                if tui
                    .ui(|ui| {
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new("SHOP SALE").size(13.0).color(COL_ACCENT),
                            )
                            .min_size(egui::vec2(96.0, 30.0))
                            .fill(COL_SURFACE),
                        )
                    })
                    .clicked()
                {
                    core.dispatch(AppCommand::Navigate(
                        "/shop?category=Accessories".to_string(),
                    ));
                }
            },
        );
    });
}

fn value_prop_cell<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, desc: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        padding: length(16.0),
        gap: length(4.0),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_SURFACE)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0)
            .with_corner_radius(8.0),
        |tui| {
            tui.label(
                egui::RichText::new(title)
                    .size(14.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(egui::RichText::new(desc).size(12.0).color(COL_TEXT_DIM));
        },
    );
}
