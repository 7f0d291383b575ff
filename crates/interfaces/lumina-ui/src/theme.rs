use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Light storefront palette, indigo accent
pub const COL_BG: Color32 = Color32::from_rgb(249, 250, 251);
pub const COL_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT: Color32 = Color32::from_rgb(17, 24, 39);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(107, 114, 128);
pub const COL_ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
pub const COL_ACCENT_SOFT: Color32 = Color32::from_rgb(238, 242, 255);
pub const COL_DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const COL_RATING: Color32 = Color32::from_rgb(234, 179, 8);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const COL_HERO: Color32 = Color32::from_rgb(17, 24, 39);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_SURFACE;
    visuals.panel_fill = COL_BG;
    visuals.override_text_color = Some(COL_TEXT);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_SURFACE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT_SOFT;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_SURFACE);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
