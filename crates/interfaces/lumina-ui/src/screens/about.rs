use crate::theme::COL_TEXT_DIM;
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>) {
    tui.style(taffy::Style {
        flex_grow: 1.0,
        justify_content: Some(taffy::JustifyContent::Center),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(|tui| {
        tui.colored_label(COL_TEXT_DIM, "About Page Placeholder");
    });
}
