use std::sync::{Arc, Mutex};

use lumina_app_core::router::Navigator;

#[test]
fn subscribers_see_every_change_synchronously() {
    let nav = Navigator::new("/");
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let seen2 = seen.clone();
    let sub = nav.subscribe(move |path| {
        seen2.lock().unwrap().push(path.clone());
    });

    nav.navigate("/shop");
    nav.navigate("/product/7");

    // Notification happens before navigate() returns; no backlog, only
    // the latest value per change.
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["/shop".to_string(), "/product/7".to_string()]
    );
    drop(sub);
}

#[test]
fn unsubscribing_stops_notifications() {
    let nav = Navigator::new("/");
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let seen2 = seen.clone();
    let sub = nav.subscribe(move |path| {
        seen2.lock().unwrap().push(path.clone());
    });

    nav.navigate("/shop");
    sub.unsubscribe();
    nav.navigate("/about");

    assert_eq!(*seen.lock().unwrap(), vec!["/shop".to_string()]);
}

#[test]
fn empty_paths_normalize_to_the_root() {
    let nav = Navigator::new("");
    assert_eq!(nav.path(), "/");

    nav.navigate("");
    assert_eq!(nav.path(), "/");
}

#[test]
fn navigation_overwrites_without_history() {
    let nav = Navigator::new("/");
    nav.navigate("/a");
    nav.navigate("/b");
    // Only the latest value exists; there is no push/replace distinction.
    assert_eq!(nav.path(), "/b");
}
