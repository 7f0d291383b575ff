use crate::theme::*;
use crate::utils::nav_link;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct NavbarResponse {
    pub nav_to: Option<String>,
    pub cart_clicked: bool,
}

const LINKS: [(&str, &str); 3] = [("Home", "/"), ("Shop", "/shop"), ("About", "/about")];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, pathname: &str, cart_count: u32) -> NavbarResponse {
    let mut resp = NavbarResponse {
        nav_to: None,
        cart_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_SURFACE)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            // Brand
            let brand = tui.ui(|ui| {
                ui.add(
                    egui::Button::new(
                        egui::RichText::new("Lumina.")
                            .size(20.0)
                            .strong()
                            .color(COL_TEXT),
                    )
                    .frame(false),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand)
            });
            if brand.clicked() {
                resp.nav_to = Some("/".to_string());
            }

            // Links
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(20.0),
                ..Default::default()
            })
            .add(|tui| {
                for (label, target) in LINKS {
                    let active = pathname == target;
                    if tui.ui(|ui| nav_link(ui, label, active)).clicked() {
                        resp.nav_to = Some(target.to_string());
                    }
                }
            });

            // Cart button with count badge
            let cart_label = if cart_count > 0 {
                format!("CART ({cart_count})")
            } else {
                "CART".to_string()
            };
            if tui
                .ui(|ui| crate::utils::cmd_button(ui, &cart_label, "outline", true))
                .clicked()
            {
                resp.cart_clicked = true;
            }
        },
    );

    resp
}
