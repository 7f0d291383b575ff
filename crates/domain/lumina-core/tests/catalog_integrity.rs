use std::collections::HashSet;
use std::str::FromStr;

use lumina_core::{Catalog, Category, CategoryFilter};

#[test]
fn builtin_catalog_parses_and_ids_are_unique() {
    let catalog = Catalog::builtin().expect("builtin catalog should parse");
    assert!(!catalog.is_empty());

    let ids: HashSet<_> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len(), "duplicate product id in catalog");
}

#[test]
fn every_product_has_display_fields_and_sane_numbers() {
    let catalog = Catalog::builtin().unwrap();
    for p in catalog.products() {
        assert!(!p.name.is_empty(), "{}: empty name", p.id);
        assert!(!p.description.is_empty(), "{}: empty description", p.id);
        assert!(!p.features.is_empty(), "{}: no features", p.id);
        assert!(p.price > 0.0, "{}: non-positive price", p.id);
        assert!((0.0..=5.0).contains(&p.rating), "{}: rating out of range", p.id);
    }
}

#[test]
fn category_labels_round_trip() {
    for cat in Category::ALL {
        assert_eq!(Category::from_str(cat.label()).unwrap(), cat);
    }
    assert!(Category::from_str("Groceries").is_err());
}

#[test]
fn filter_composes_category_and_search() {
    let catalog = Catalog::builtin().unwrap();

    let all = catalog.filter(CategoryFilter::All, "");
    assert_eq!(all.len(), catalog.len());

    let electronics = catalog.filter(CategoryFilter::Only(Category::Electronics), "");
    assert!(!electronics.is_empty());
    assert!(electronics.iter().all(|p| p.category == Category::Electronics));

    // Search is case-insensitive and must agree with the category filter.
    let hit = catalog.filter(CategoryFilter::Only(Category::Electronics), "aura");
    assert_eq!(hit.len(), 1);
    let miss = catalog.filter(CategoryFilter::Only(Category::Fashion), "aura");
    assert!(miss.is_empty());
}

#[test]
fn featured_is_a_prefix_and_never_overruns() {
    let catalog = Catalog::builtin().unwrap();
    let featured = catalog.featured(4);
    assert_eq!(featured.len(), 4.min(catalog.len()));
    assert_eq!(featured, &catalog.products()[..featured.len()]);
    assert_eq!(catalog.featured(10_000).len(), catalog.len());
}
