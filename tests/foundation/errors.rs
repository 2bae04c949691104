//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use envision_foundation::{Domain, Error, ErrorKind, Magnitude};

#[test]
fn error_magnitude_out_of_domain() {
    let err =
        Error::magnitude_out_of_domain("level".to_string(), Magnitude::Max, Domain::ZeroPositive);
    assert!(matches!(err.kind, ErrorKind::MagnitudeOutOfDomain { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("level"));
    assert!(msg.contains("max"));
}

#[test]
fn error_unknown_quantity() {
    let err = Error::unknown_quantity("ghost".to_string());
    assert!(matches!(err.kind, ErrorKind::UnknownQuantity(_)));
    assert!(format!("{err}").contains("ghost"));
}

#[test]
fn error_duplicate_quantity() {
    let err = Error::duplicate_quantity("level".to_string());
    assert!(matches!(err.kind, ErrorKind::DuplicateQuantity(_)));
}

#[test]
fn error_unassigned_quantity() {
    let err = Error::unassigned_quantity("level".to_string());
    let msg = format!("{err}");
    assert!(msg.contains("level"));
    assert!(msg.contains("no assigned value"));
}

#[test]
fn error_cancelled() {
    let err = Error::cancelled(3);
    assert!(matches!(err.kind, ErrorKind::Cancelled { explored: 3 }));
}
