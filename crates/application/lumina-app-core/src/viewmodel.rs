use lumina_core::{price_history, Catalog, Category, CategoryFilter, PricePoint, Product, ProductId};

use crate::chat::{ChatMessage, ChatRole};
use crate::domain::CartState;

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

fn format_time(msg: &ChatMessage) -> String {
    msg.timestamp.format("%H:%M").to_string()
}

#[derive(Debug, Clone)]
pub struct ProductCardVm {
    pub id: ProductId,
    pub name: String,
    pub category_label: &'static str,
    pub price_label: String,
    pub rating_label: String,
}

impl From<&Product> for ProductCardVm {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category_label: p.category.label(),
            price_label: format_price(p.price),
            rating_label: format!("★ {:.1} ({})", p.rating, p.reviews),
        }
    }
}

// --- Screen VMs ---

#[derive(Debug, Clone)]
pub struct HomeVm {
    pub featured: Vec<ProductCardVm>,
}

pub fn home_vm(catalog: &Catalog) -> HomeVm {
    HomeVm {
        featured: catalog
            .featured(lumina_config::FEATURED_COUNT)
            .iter()
            .map(ProductCardVm::from)
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct ShopVm {
    pub products: Vec<ProductCardVm>,
    pub filters: Vec<CategoryFilter>,
    pub is_empty: bool,
}

pub fn shop_vm(catalog: &Catalog, filter: CategoryFilter, search: &str) -> ShopVm {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(Category::ALL.map(CategoryFilter::Only));

    let products: Vec<ProductCardVm> = catalog
        .filter(filter, search)
        .into_iter()
        .map(ProductCardVm::from)
        .collect();

    ShopVm {
        is_empty: products.is_empty(),
        products,
        filters,
    }
}

#[derive(Debug, Clone)]
pub struct ProductDetailsVm {
    pub product: Product,
    pub price_label: String,
    pub full_stars: usize,
    pub reviews_label: String,
    pub chart: Vec<PricePoint>,
}

pub fn product_details_vm(catalog: &Catalog, id: &str) -> Option<ProductDetailsVm> {
    let product = catalog.get(&id.to_string())?;
    Some(ProductDetailsVm {
        price_label: format_price(product.price),
        full_stars: product.rating.floor() as usize,
        reviews_label: format!("({} reviews)", product.reviews),
        chart: price_history(product),
        product: product.clone(),
    })
}

// --- Cart VMs ---

#[derive(Debug, Clone)]
pub struct CartLineVm {
    pub id: ProductId,
    pub name: String,
    pub category_label: &'static str,
    pub line_total_label: String,
    pub quantity: u32,
    pub can_decrement: bool,
}

#[derive(Debug, Clone)]
pub struct CartVm {
    pub lines: Vec<CartLineVm>,
    pub subtotal_label: String,
    pub count: u32,
    pub is_empty: bool,
    pub free_shipping: bool,
}

pub fn cart_vm(state: &CartState) -> CartVm {
    let lines = state
        .lines
        .iter()
        .map(|l| CartLineVm {
            id: l.id.clone(),
            name: l.name.clone(),
            category_label: l.category.label(),
            line_total_label: format_price(l.line_total()),
            quantity: l.quantity,
            can_decrement: l.quantity > 1,
        })
        .collect();

    CartVm {
        lines,
        subtotal_label: format_price(state.subtotal()),
        count: state.count(),
        is_empty: state.lines.is_empty(),
        free_shipping: state.subtotal() >= lumina_config::FREE_SHIPPING_THRESHOLD,
    }
}

// --- Chat VMs ---

#[derive(Debug, Clone)]
pub struct ChatLineVm {
    pub from_user: bool,
    pub text: String,
    pub time_label: String,
}

#[derive(Debug, Clone)]
pub struct ChatVm {
    pub lines: Vec<ChatLineVm>,
    pub pending: bool,
}

pub fn chat_vm(messages: &[ChatMessage], pending: bool) -> ChatVm {
    ChatVm {
        lines: messages
            .iter()
            .map(|m| ChatLineVm {
                from_user: m.role == ChatRole::User,
                text: m.text.clone(),
                time_label: format_time(m),
            })
            .collect(),
        pending,
    }
}
