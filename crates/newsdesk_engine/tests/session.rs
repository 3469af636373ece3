use newsdesk_engine::{LocalSessionService, SessionService};

#[test]
fn sessions_are_opaque_unique_hex_ids() {
    let service = LocalSessionService::new();
    let a = service.init_session();
    let b = service.init_session();

    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn clear_releases_only_the_named_session() {
    let service = LocalSessionService::new();
    let a = service.init_session();
    let b = service.init_session();

    service.clear_session(&a);

    assert!(!service.is_active(&a));
    assert!(service.is_active(&b));

    // Clearing twice is tolerated.
    service.clear_session(&a);
    assert!(service.is_active(&b));
}
