use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_SURFACE),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        "outline" => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text =
        egui::RichText::new(label)
            .size(13.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 30.0))
        .fill(if enabled && variant == "primary" {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Category tab in the shop filter row. Selected tabs invert.
pub fn pill_button(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let (fill, text_col) = if selected {
        (COL_TEXT, COL_SURFACE)
    } else {
        (COL_SURFACE, COL_TEXT_DIM)
    };

    ui.add(
        egui::Button::new(egui::RichText::new(label).size(12.0).color(text_col))
            .min_size(egui::vec2(64.0, 26.0))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, if selected { COL_TEXT } else { COL_BORDER })),
    )
}

/// Text-styled navigation affordance; activation is handled by the caller
/// through the navigator, never by the windowing layer.
pub fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let text = egui::RichText::new(label).size(14.0).color(if active {
        COL_TEXT
    } else {
        COL_TEXT_DIM
    });
    let text = if active { text.strong() } else { text };

    ui.add(egui::Button::new(text).frame(false))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Five-star rating row, filled to `full_stars`.
pub fn star_row(ui: &mut egui::Ui, full_stars: usize) {
    let mut stars = String::new();
    for i in 0..5 {
        stars.push(if i < full_stars { '★' } else { '☆' });
    }
    ui.label(egui::RichText::new(stars).size(14.0).color(COL_RATING));
}
