use lumina_core::{Category, Product, ProductId};

use crate::router::RouteTable;

/// Page-level views addressable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Shop,
    ProductDetails,
    About,
    /// Catch-all target: send the visitor somewhere that exists.
    Redirect(&'static str),
}

/// The storefront's navigation surface. The catch-all is declared last by
/// convention; first-match-wins makes its position irrelevant.
pub fn route_table() -> RouteTable<Page> {
    RouteTable::new()
        .route("/", Page::Home)
        .route("/shop", Page::Shop)
        .route("/product/:id", Page::ProductDetails)
        .route("/about", Page::About)
        .route("*", Page::Redirect("/"))
}

/// One product entry in the cart. Display fields are copied from the
/// product at add time; `quantity` never drops below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The shared cart plus its open/closed flag. Line insertion order is
/// preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub cart_open: bool,
}

impl CartState {
    /// Sum of price x quantity over all lines, recomputed on every call.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines, recomputed on every call.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
