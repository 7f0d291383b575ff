use std::sync::{Arc, Mutex};

use lumina_app_core::app_core::{CartEvent, CartStore};
use lumina_app_core::domain::CartState;
use lumina_core::{Category, Product};

fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        category: Category::Electronics,
        price,
        rating: 4.5,
        reviews: 10,
        image: String::new(),
        description: "desc".to_string(),
        features: vec!["one".to_string()],
    }
}

#[test]
fn adding_the_same_product_twice_merges_into_one_line() {
    let store = CartStore::new(CartState::default());
    store.apply(CartEvent::ItemAdded(product("a", 10.0)));
    store.apply(CartEvent::ItemAdded(product("a", 10.0)));

    let state = store.state();
    assert_eq!(state.lines.len(), 1);
    assert_eq!(state.lines[0].quantity, 2);
    assert_eq!(state.count(), 2);
}

#[test]
fn adding_opens_the_cart() {
    let store = CartStore::new(CartState::default());
    assert!(!store.state().cart_open);

    store.apply(CartEvent::ItemAdded(product("a", 10.0)));
    assert!(store.state().cart_open);

    store.apply(CartEvent::CartOpenSet(false));
    assert!(!store.state().cart_open);
}

#[test]
fn quantity_below_one_is_rejected_not_removed() {
    let store = CartStore::new(CartState::default());
    store.apply(CartEvent::ItemAdded(product("a", 10.0)));

    store.apply(CartEvent::QuantitySet {
        id: "a".to_string(),
        quantity: 0,
    });

    let state = store.state();
    assert_eq!(state.lines.len(), 1);
    assert_eq!(state.lines[0].quantity, 1);
}

#[test]
fn mutations_on_absent_lines_are_no_ops() {
    let store = CartStore::new(CartState::default());
    store.apply(CartEvent::ItemAdded(product("a", 10.0)));
    let before = store.state();

    store.apply(CartEvent::ItemRemoved("ghost".to_string()));
    store.apply(CartEvent::QuantitySet {
        id: "ghost".to_string(),
        quantity: 5,
    });

    assert_eq!(store.state(), before);
}

#[test]
fn subtotal_always_matches_direct_recomputation() {
    let store = CartStore::new(CartState::default());
    store.apply(CartEvent::ItemAdded(product("a", 10.0)));
    store.apply(CartEvent::ItemAdded(product("b", 3.5)));
    store.apply(CartEvent::QuantitySet {
        id: "b".to_string(),
        quantity: 4,
    });
    store.apply(CartEvent::ItemAdded(product("c", 99.0)));
    store.apply(CartEvent::ItemRemoved("a".to_string()));

    let state = store.state();
    let direct: f64 = state
        .lines
        .iter()
        .map(|l| l.price * f64::from(l.quantity))
        .sum();
    assert_eq!(state.subtotal(), direct);
    assert_eq!(state.subtotal(), 3.5 * 4.0 + 99.0);
    assert_eq!(state.count(), 5);
}

#[test]
fn observers_only_ever_see_settled_states() {
    let store = CartStore::new(CartState::default());
    let seen: Arc<Mutex<Vec<CartState>>> = Arc::new(Mutex::new(Vec::new()));

    let seen2 = seen.clone();
    let _sub = store.subscribe(move |state| {
        seen2.lock().unwrap().push(state.clone());
    });

    store.apply(CartEvent::ItemAdded(product("a", 10.0)));
    store.apply(CartEvent::QuantitySet {
        id: "a".to_string(),
        quantity: 0,
    });
    store.apply(CartEvent::ItemRemoved("a".to_string()));

    let snapshots = seen.lock().unwrap();
    assert_eq!(snapshots.len(), 3);
    for state in snapshots.iter() {
        let mut ids: Vec<_> = state.lines.iter().map(|l| l.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), state.lines.len(), "duplicate line observed");
        assert!(state.lines.iter().all(|l| l.quantity >= 1));
    }
    // The rejected quantity update still published the unchanged state.
    assert_eq!(snapshots[0], snapshots[1]);
    assert!(snapshots[2].lines.is_empty());
}
