use std::sync::Arc;

use lumina_core::{Catalog, ProductId};

use crate::app_core::{CartEvent, CartStore};
use crate::chat::ChatSession;
use crate::domain::{route_table, CartState, Page};
use crate::ports::AssistantPort;
use crate::router::{Navigator, Resolved, RouteTable};

/// UI intents. Everything a view can do goes through `dispatch`.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // Navigation
    Navigate(String),

    // Cart
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    UpdateQuantity(ProductId, u32),
    SetCartOpen(bool),

    // Assistant
    SendChatMessage(String),
}

/// Application root: owns the navigator, the cart store, the chat session,
/// and the catalog, wired to the route table. Constructed once at startup
/// and handed to the interface by reference; there is no global instance.
pub struct StoreApp {
    pub navigator: Navigator,
    pub cart: CartStore,
    pub chat: ChatSession,
    catalog: Catalog,
    routes: RouteTable<Page>,
}

impl StoreApp {
    pub fn new(catalog: Catalog, assistant: Arc<dyn AssistantPort>, start_path: &str) -> Self {
        Self {
            navigator: Navigator::new(start_path),
            cart: CartStore::new(CartState::default()),
            chat: ChatSession::new(assistant),
            catalog,
            routes: route_table(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Navigate(path) => self.navigator.navigate(&path),

            AppCommand::AddToCart(id) => {
                // The catalog is the only source of products; unknown ids
                // are dropped.
                if let Some(product) = self.catalog.get(&id).cloned() {
                    self.cart.apply(CartEvent::ItemAdded(product));
                }
            }
            AppCommand::RemoveFromCart(id) => self.cart.apply(CartEvent::ItemRemoved(id)),
            AppCommand::UpdateQuantity(id, quantity) => {
                self.cart.apply(CartEvent::QuantitySet { id, quantity })
            }
            AppCommand::SetCartOpen(open) => self.cart.apply(CartEvent::CartOpenSet(open)),

            AppCommand::SendChatMessage(text) => self.chat.send(&text),
        }
    }

    /// Drain async completions. Call once per UI frame.
    pub fn tick(&mut self) {
        self.chat.drain_events();
    }

    /// Resolve the current path to a page. A catch-all hit issues its
    /// redirect and returns `None` so the caller skips this frame; an
    /// unmatched path with no catch-all also renders nothing.
    pub fn resolve_page(&mut self) -> Option<Resolved<Page>> {
        let resolved = self.routes.resolve(&self.navigator.path())?;
        if let Page::Redirect(target) = resolved.view {
            if self.navigator.location().pathname != target {
                self.navigator.navigate(target);
            }
            return None;
        }
        Some(resolved)
    }
}
