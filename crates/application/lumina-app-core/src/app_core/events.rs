use lumina_core::{Product, ProductId};

#[derive(Debug, Clone)]
pub enum CartEvent {
    // Line items
    ItemAdded(Product),
    ItemRemoved(ProductId),
    QuantitySet { id: ProductId, quantity: u32 },

    // Visibility
    CartOpenSet(bool),
}
