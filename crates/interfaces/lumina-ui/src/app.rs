use crate::components::{cart_panel, chat_panel, navbar};
use crate::screens::{about, home, product_details, shop};
use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};
use lumina_app_core::router::Location;
use lumina_app_core::viewmodel::{cart_vm, chat_vm};
use lumina_app_core::{AppCommand, CartState, Page, StoreApp, Subscription};

pub struct LuminaApp {
    core: StoreApp,
    shop_state: shop::ShopScreenState,
    chat_state: chat_panel::ChatPanelState,
    last_path: String,
    _nav_sub: Subscription<String>,
    _cart_sub: Subscription<CartState>,
}

impl LuminaApp {
    pub fn new(ctx: &egui::Context, core: StoreApp) -> Self {
        // Repaint whenever navigation or the cart publishes a change, so
        // updates landing between frames are never missed.
        let nav_ctx = ctx.clone();
        let nav_sub = core.navigator.subscribe(move |_| nav_ctx.request_repaint());
        let cart_ctx = ctx.clone();
        let cart_sub = core.cart.subscribe(move |_| cart_ctx.request_repaint());

        let last_path = core.navigator.path();
        let shop_state = shop::ShopScreenState::from_location(&core.navigator.location());

        Self {
            core,
            shop_state,
            chat_state: chat_panel::ChatPanelState::default(),
            last_path,
            _nav_sub: nav_sub,
            _cart_sub: cart_sub,
        }
    }
}

impl eframe::App for LuminaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();

        // Remount semantics: screen-local state resets when navigation
        // lands somewhere new.
        let path = self.core.navigator.path();
        if path != self.last_path {
            let location = Location::parse(&path);
            if location.pathname == "/shop" {
                self.shop_state = shop::ShopScreenState::from_location(&location);
            }
            self.last_path = path;
        }

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap();
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement for the taffy multi-pass
            // layout.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let cart_state = self.core.cart.state();
        if cart_state.cart_open {
            let vm = cart_vm(&cart_state);
            egui::SidePanel::right("cart-panel")
                .resizable(false)
                .exact_width(340.0)
                .frame(
                    egui::Frame::new()
                        .fill(COL_SURFACE)
                        .inner_margin(egui::Margin::same(16)),
                )
                .show(ctx, |ui| cart_panel::draw(ui, &vm, &mut self.core));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    // Navbar
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(52.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let location = self.core.navigator.location();
                        let resp = navbar::draw(tui, &location.pathname, cart_state.count());
                        if let Some(target) = resp.nav_to {
                            self.core.dispatch(AppCommand::Navigate(target));
                        }
                        if resp.cart_clicked {
                            self.core.dispatch(AppCommand::SetCartOpen(true));
                        }
                    });

                    // Active screen
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: percent(1.),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(16.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        match self.core.resolve_page() {
                            Some(resolved) => match resolved.view {
                                Page::Home => home::draw(tui, &mut self.core),
                                Page::Shop => {
                                    shop::draw(tui, &mut self.core, &mut self.shop_state)
                                }
                                Page::ProductDetails => {
                                    product_details::draw(tui, &mut self.core, &resolved.params)
                                }
                                Page::About => about::draw(tui),
                                Page::Redirect(_) => {}
                            },
                            // Redirect or not-found: nothing this frame.
                            None => {}
                        }
                    });

                    // Footer
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        justify_content: Some(taffy::JustifyContent::SpaceBetween),
                        align_items: Some(taffy::AlignItems::Center),
                        padding: length(12.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(44.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Row,
                            align_items: Some(taffy::AlignItems::Center),
                            gap: length(8.0),
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.label(
                                egui::RichText::new("Lumina.")
                                    .size(13.0)
                                    .strong()
                                    .color(COL_TEXT),
                            );
                            tui.label(
                                egui::RichText::new("© 2024 Lumina Inc. All rights reserved.")
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            );
                        });
                        tui.label(
                            egui::RichText::new("Privacy · Terms · Contact")
                                .size(11.0)
                                .color(COL_TEXT_DIM),
                        );
                    });
                });
        });

        // Chat overlay: independent of router and store.
        let chat = chat_vm(self.core.chat.messages(), self.core.chat.is_pending());
        chat_panel::draw(ctx, &mut self.chat_state, &chat, &mut self.core);

        if self.core.chat.is_pending() {
            ctx.request_repaint();
        }
    }
}
