use crate::components::product_card;
use crate::theme::*;
use crate::utils::{pill_button, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use lumina_app_core::router::Location;
use lumina_app_core::viewmodel::shop_vm;
use lumina_app_core::{AppCommand, StoreApp};
use lumina_core::{Category, CategoryFilter};

/// Screen-local state, reinitialized from the location whenever navigation
/// lands on the shop (the query's `category` selects the starting filter).
#[derive(Default)]
pub struct ShopScreenState {
    pub filter: CategoryFilter,
    pub search: String,
}

impl ShopScreenState {
    pub fn from_location(location: &Location) -> Self {
        let filter = location
            .query_param("category")
            .and_then(|c| c.parse::<Category>().ok())
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All);
        Self {
            filter,
            search: String::new(),
        }
    }
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut StoreApp, state: &mut ShopScreenState) {
    let vm = shop_vm(core.catalog(), state.filter, &state.search);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        // Title row with search
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
                    egui::RichText::new("Shop All")
                        .size(22.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("Explore our premium collection")
                        .size(12.0)
                        .color(COL_TEXT_DIM),
                );
            });

            tui.ui_add(
                egui::TextEdit::singleline(&mut state.search)
                    .hint_text("Search products...")
                    .desired_width(220.0),
            );
        });

        // Category tabs
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(6.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| section_label(ui, "FILTERS:"));
            for filter in &vm.filters {
                let selected = state.filter == *filter;
                if tui
                    .ui(|ui| pill_button(ui, filter.label(), selected))
                    .clicked()
                {
                    state.filter = *filter;
                }
            }
        });

        if vm.is_empty {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                justify_content: Some(taffy::JustifyContent::Center),
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.colored_label(COL_TEXT_DIM, "No products found matching your criteria.");
                if tui
                    .ui(|ui| crate::utils::nav_link(ui, "Clear Filters", true))
                    .clicked()
                {
                    state.filter = CategoryFilter::All;
                    state.search.clear();
                }
            });
        } else {
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
                for card in &vm.products {
                    let resp = product_card::draw(&mut *tui, card);
                    if resp.add {
                        core.dispatch(AppCommand::AddToCart(card.id.clone()));
                    } else if resp.open {
                        core.dispatch(AppCommand::Navigate(format!("/product/{}", card.id)));
                    }
                }
            });
        }
    });
}
