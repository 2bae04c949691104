//! Integration tests for quantity-name interning.

use envision_foundation::Interner;

#[test]
fn interning_is_stable_and_dense() {
    let mut interner = Interner::new();
    let a = interner.intern("inflow");
    let b = interner.intern("outflow");

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(interner.intern("inflow"), a);
    assert_eq!(interner.len(), 2);
}

#[test]
fn names_resolve_both_ways() {
    let mut interner = Interner::new();
    let id = interner.intern("pressure");

    assert_eq!(interner.get(id), Some("pressure"));
    assert_eq!(interner.lookup("pressure"), Some(id));
    assert!(interner.lookup("volume").is_none());
}

#[test]
fn empty_interner() {
    let interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.len(), 0);
}
