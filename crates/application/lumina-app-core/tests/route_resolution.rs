use lumina_app_core::domain::{route_table, Page};
use lumina_app_core::router::{Location, RouteTable};

#[test]
fn product_path_resolves_with_its_id_param() {
    let resolved = route_table().resolve("/product/42").unwrap();
    assert_eq!(resolved.view, Page::ProductDetails);
    assert_eq!(resolved.params.get("id"), Some(&"42".to_string()));
    assert_eq!(resolved.params.len(), 1);
}

#[test]
fn unknown_paths_fall_through_to_the_catch_all() {
    let resolved = route_table().resolve("/unknown").unwrap();
    assert_eq!(resolved.view, Page::Redirect("/"));
    assert!(resolved.params.is_empty());
}

#[test]
fn declaration_order_decides_between_overlapping_patterns() {
    let table = RouteTable::new()
        .route("/items/:id", "param")
        .route("/items/special", "literal");

    // First structural match wins, not best match.
    assert_eq!(table.resolve("/items/special").unwrap().view, "param");
}

#[test]
fn the_catch_all_is_last_resort_regardless_of_position() {
    let table = RouteTable::new()
        .route("*", "fallback")
        .route("/shop", "shop");

    assert_eq!(table.resolve("/shop").unwrap().view, "shop");
    assert_eq!(table.resolve("/nope").unwrap().view, "fallback");
}

#[test]
fn no_match_and_no_catch_all_yields_none() {
    let table = RouteTable::new().route("/", "home");
    assert!(table.resolve("/missing").is_none());
}

#[test]
fn query_strings_never_take_part_in_matching() {
    let resolved = route_table().resolve("/shop?category=Electronics").unwrap();
    assert_eq!(resolved.view, Page::Shop);

    let location = Location::parse("/shop?category=Electronics");
    assert_eq!(location.pathname, "/shop");
    assert_eq!(location.search, "category=Electronics");
    assert_eq!(
        location.query_param("category"),
        Some("Electronics".to_string())
    );
}

#[test]
fn all_declared_paths_reach_their_pages() {
    let table = route_table();
    assert_eq!(table.resolve("/").unwrap().view, Page::Home);
    assert_eq!(table.resolve("/shop").unwrap().view, Page::Shop);
    assert_eq!(table.resolve("/about").unwrap().view, Page::About);
}
