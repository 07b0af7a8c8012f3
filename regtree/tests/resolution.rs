//! Resolution walk tests: shadowing, fallback, and the end-to-end scenario.

use regtree::{ScopedRegistry, handler_fn};
use std::sync::Arc;

fn registry(name: &str) -> ScopedRegistry<()> {
    ScopedRegistry::new(name).unwrap()
}

#[test]
fn shadowing_prefers_the_descendant_registration() {
    let root = registry("R");
    let child = registry("C");
    root.attach_child("C", &child).unwrap();

    let at_root = handler_fn(|_: &()| Ok(()));
    let at_child = handler_fn(|_: &()| Ok(()));
    root.register("C::X", &at_root).unwrap();
    child.register("X", &at_child).unwrap();

    // Descending into child C wins over R's own C::X entry.
    let resolved = root.resolve("C::X");
    assert_eq!(resolved.len(), 1);
    assert!(Arc::ptr_eq(&resolved[0], &at_child));
}

#[test]
fn descent_is_authoritative_even_when_empty() {
    let root = registry("R");
    let child = registry("C");
    root.attach_child("C", &child).unwrap();

    let at_root = handler_fn(|_: &()| Ok(()));
    root.register("C::X", &at_root).unwrap();

    // The child exists but has no registration for X: its empty answer is
    // final, and R's own C::X entry stays shadowed.
    assert!(root.resolve("C::X").is_empty());

    // Detach the child and R's entry becomes reachable again.
    root.detach_child("C").unwrap();
    let resolved = root.resolve("C::X");
    assert_eq!(resolved.len(), 1);
    assert!(Arc::ptr_eq(&resolved[0], &at_root));
}

#[test]
fn fallback_climbs_from_a_grandchild_to_the_root() {
    let root = registry("R");
    let child = registry("C");
    let grandchild = registry("G");
    root.attach_child("C", &child).unwrap();
    child.attach_child("G", &grandchild).unwrap();

    let general = handler_fn(|_: &()| Ok(()));
    root.register("Y", &general).unwrap();

    let resolved = grandchild.resolve("R::Y");
    assert_eq!(resolved.len(), 1);
    assert!(Arc::ptr_eq(&resolved[0], &general));
}

#[test]
fn sibling_scopes_reach_each_other_through_the_parent() {
    let root = registry("ROOT");
    let users = registry("USERS");
    let billing = registry("BILLING");
    root.attach_child("USERS", &users).unwrap();
    root.attach_child("BILLING", &billing).unwrap();

    let handler = handler_fn(|_: &()| Ok(()));
    billing.register("INVOICE_CREATED", &handler).unwrap();

    // USERS has no BILLING child; the lookup bubbles to ROOT and descends.
    let resolved = users.resolve("BILLING::INVOICE_CREATED");
    assert_eq!(resolved.len(), 1);
    assert!(Arc::ptr_eq(&resolved[0], &handler));
}

#[test]
fn case_is_ignored_between_registration_and_resolution() {
    let reg = registry("ROOT");
    let handler = handler_fn(|_: &()| Ok(()));

    reg.register("Foo::Bar", &handler).unwrap();
    assert_eq!(reg.resolve("foo::BAR").len(), 1);
    assert_eq!(reg.resolve("FOO::bar").len(), 1);
}

#[test]
fn absence_is_an_empty_result_not_an_error() {
    let reg = registry("ROOT");
    assert!(reg.resolve("NO::SUCH::CAPABILITY").is_empty());
    // Unparseable patterns resolve empty too.
    assert!(reg.resolve("").is_empty());
    assert!(reg.resolve("A::::B").is_empty());
}

#[test]
fn end_to_end_three_level_tree() {
    let root = registry("ROOT");
    let domain = registry("DOMAIN");
    let context = registry("CONTEXT");
    root.attach_child("DOMAIN", &domain).unwrap();
    domain.attach_child("CONTEXT", &context).unwrap();

    let h1 = handler_fn(|_: &()| Ok(()));
    context.register("DO_THING", &h1).unwrap();

    let resolved = root.resolve("DOMAIN::CONTEXT::DO_THING");
    assert_eq!(resolved.len(), 1);
    assert!(Arc::ptr_eq(&resolved[0], &h1));

    // Unregistering through the full path from the leaf finds the same
    // table resolution did.
    assert!(context.unregister("DOMAIN::CONTEXT::DO_THING", &h1).unwrap());
    assert!(root.resolve("DOMAIN::CONTEXT::DO_THING").is_empty());
}

#[test]
fn resolution_returns_a_snapshot() {
    let reg = registry("ROOT");
    let handler = handler_fn(|_: &()| Ok(()));
    reg.register("PING", &handler).unwrap();

    let resolved = reg.resolve("PING");
    reg.unregister("PING", &handler).unwrap();

    // The already-resolved list is unaffected; the caller owns staleness.
    assert_eq!(resolved.len(), 1);
    assert!(reg.resolve("PING").is_empty());
}
