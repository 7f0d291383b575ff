use crate::domain::{CartLine, CartState};

use super::events::CartEvent;

/// Fold one event into the cart. Every invariant lives here: at most one
/// line per product id, quantity floor of 1, adds open the cart.
pub fn reduce(mut state: CartState, ev: CartEvent) -> CartState {
    match ev {
        CartEvent::ItemAdded(product) => {
            if let Some(line) = state.lines.iter_mut().find(|l| l.id == product.id) {
                line.quantity += 1;
            } else {
                state.lines.push(CartLine::from_product(&product));
            }
            state.cart_open = true;
        }

        CartEvent::ItemRemoved(id) => state.lines.retain(|l| l.id != id),

        CartEvent::QuantitySet { id, quantity } => {
            // A request below the floor is dropped, not treated as removal.
            if quantity >= 1 {
                if let Some(line) = state.lines.iter_mut().find(|l| l.id == id) {
                    line.quantity = quantity;
                }
            }
        }

        CartEvent::CartOpenSet(open) => state.cart_open = open,
    }
    state
}
