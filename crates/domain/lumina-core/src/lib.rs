use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod history;

pub use catalog::Catalog;
pub use history::{price_history, PricePoint};

pub type ProductId = String;

/// Closed set of store departments. The catalog document and the shop
/// filter both speak in these terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Accessories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Accessories => "Accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Category::Electronics),
            "Fashion" => Ok(Category::Fashion),
            "Home" => Ok(Category::Home),
            "Accessories" => Ok(Category::Accessories),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// Shop-screen filter: everything, or one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
}
