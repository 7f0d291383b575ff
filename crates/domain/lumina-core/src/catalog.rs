use anyhow::Context;

use crate::{CategoryFilter, Product, ProductId};

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Read-only, ordered product list. Constructed once at startup and handed
/// by reference to every consumer.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog shipped with the application.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(raw).context("Failed to parse catalog document")?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Shop-screen query: category filter and case-insensitive name search
    /// compose; both must match.
    pub fn filter(&self, filter: CategoryFilter, search: &str) -> Vec<&Product> {
        let needle = search.to_lowercase();
        self.products
            .iter()
            .filter(|p| filter.accepts(p.category))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The first `n` products, in catalog order.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
