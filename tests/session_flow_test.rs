//! End-to-end session flows across simulated requests.

use serde_json::json;
use web_helpers::session::{IndexedAccess, MemoryHost, MemoryRegistry, Session, FLASH_KEY};
use web_helpers::web::Request;
use web_helpers::{csrf_filter, csrf_token, SessionErrorKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn request_with_cookie(registry: &MemoryRegistry, id: &str) -> Session<MemoryHost> {
    Session::new(MemoryHost::new(registry.clone()).with_cookie(id))
}

#[test]
fn wrong_token_is_rejected_and_rotated() {
    init_tracing();
    let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    session.start().unwrap();

    let before = session.token().unwrap().to_owned();
    let mut request = Request::new("/account/delete");
    request.add_form_field("_token", "not-the-token");

    assert!(!csrf_filter(&mut session, &request).unwrap());
    let after = session.token().unwrap();
    assert_ne!(after, before);
    assert_eq!(after.len(), 32);
}

#[test]
fn flash_survives_exactly_one_request() {
    init_tracing();
    let registry = MemoryRegistry::new();

    // Request 1: set a flash message and persist.
    let mut session = Session::new(MemoryHost::new(registry.clone()));
    session.start().unwrap();
    session.flash("notice", "Profile saved");
    let id = session.id().unwrap().to_owned();
    session.host_mut().commit();

    // Request 2: read the message, then clear flashes.
    let mut session = request_with_cookie(&registry, &id);
    session.start().unwrap();
    assert_eq!(session.get("notice"), Some(&json!("Profile saved")));
    session.delete_flash();
    session.host_mut().commit();

    // Request 3: gone.
    let mut session = request_with_cookie(&registry, &id);
    session.start().unwrap();
    assert_eq!(session.get("notice"), None);
    assert_eq!(session.get(FLASH_KEY), Some(&json!([])));
}

#[test]
fn token_persists_across_requests_until_checked() {
    init_tracing();
    let registry = MemoryRegistry::new();

    let mut session = Session::new(MemoryHost::new(registry.clone()));
    let issued = csrf_token(&mut session).unwrap();
    let id = session.id().unwrap().to_owned();
    session.host_mut().commit();

    let mut session = request_with_cookie(&registry, &id);
    let mut request = Request::new("/transfer");
    request.add_form_field("_token", issued.expose_secret());

    assert!(csrf_filter(&mut session, &request).unwrap());
    assert!(!csrf_filter(&mut session, &request).unwrap());
}

#[test]
fn unknown_cookie_gets_fresh_identifier() {
    init_tracing();
    let registry = MemoryRegistry::new();

    let mut session = request_with_cookie(&registry, "attacker-chosen");
    session.start().unwrap();
    assert_ne!(session.id(), Some("attacker-chosen"));

    let mut lenient = Session::new(
        MemoryHost::new(registry)
            .with_cookie("attacker-chosen")
            .with_strict_ids(false),
    );
    lenient.start().unwrap();
    assert_eq!(lenient.id(), Some("attacker-chosen"));
}

#[test]
fn set_id_only_before_start() {
    let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    assert_eq!(session.set_id("chosen").unwrap(), "");
    assert_eq!(session.set_id("chosen-again").unwrap(), "chosen");

    session.start().unwrap();
    assert_eq!(session.id(), Some("chosen-again"));

    let err = session.set_id("late").unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::SessionActive);
}

#[test]
fn concurrent_requests_last_commit_wins() {
    init_tracing();
    let registry = MemoryRegistry::new();

    let mut seed = Session::new(MemoryHost::new(registry.clone()));
    seed.start().unwrap();
    let id = seed.id().unwrap().to_owned();
    seed.host_mut().commit();

    // Two tabs load the same session before either persists.
    let mut tab_a = request_with_cookie(&registry, &id);
    let mut tab_b = request_with_cookie(&registry, &id);
    tab_a.start().unwrap();
    tab_b.start().unwrap();

    tab_a.push("cart", "apple");
    tab_b.push("cart", "pear");

    tab_a.host_mut().commit();
    tab_b.host_mut().commit();

    let mut after = request_with_cookie(&registry, &id);
    after.start().unwrap();
    assert_eq!(after.get("cart"), Some(&json!(["pear"])));
}

#[test]
fn destroy_removes_from_registry() {
    let registry = MemoryRegistry::new();
    let mut session = Session::new(MemoryHost::new(registry.clone()));
    session.start().unwrap();
    let id = session.id().unwrap().to_owned();
    session.host_mut().commit();
    assert!(registry.contains(&id));

    assert!(session.destroy());
    assert!(!registry.contains(&id));
    assert!(session.id().is_none());
    assert!(!session.destroy());
}

#[test]
fn indexed_access_mirrors_named_operations() {
    let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    session.start().unwrap();

    session.set_item("prefs.theme", json!("dark"));
    assert_eq!(session.item("prefs.theme"), Some(&json!("dark")));
    assert_eq!(session["prefs.theme"], json!("dark"));
    assert!(session.item_exists("prefs.theme"));

    session.set_item("prefs.beta", json!(false));
    assert!(!session.item_exists("prefs.beta"));

    session.remove_item("prefs.theme");
    assert_eq!(session["prefs.theme"], json!(null));
}

#[test]
fn list_elements_update_in_place_across_requests() {
    let registry = MemoryRegistry::new();

    let mut session = Session::new(MemoryHost::new(registry.clone()));
    session.start().unwrap();
    session.push("cart", "apple");
    session.push("cart", "pear");
    let id = session.id().unwrap().to_owned();
    session.host_mut().commit();

    let mut session = request_with_cookie(&registry, &id);
    session.start().unwrap();
    assert_eq!(session.get("cart.0"), Some(&json!("apple")));

    session.set("cart.1", "plum");
    session.delete("cart.1");
    session.set("cart.1", "fig");
    assert_eq!(session.get("cart"), Some(&json!(["apple", "fig"])));
}
