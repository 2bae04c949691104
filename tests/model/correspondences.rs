//! Integration tests for value-correspondence constraints.

use envision_foundation::{Domain, ErrorKind, Magnitude};
use envision_model::CausalModel;

fn two_level_model() -> CausalModel {
    let mut model = CausalModel::new("columns");
    let e = model.add_entity("columns");
    model
        .add_quantity(e, "left", Domain::ZeroPositiveMax)
        .unwrap();
    model
        .add_quantity(e, "right", Domain::ZeroPositiveMax)
        .unwrap();
    model
}

#[test]
fn out_of_domain_correspondence_rejected() {
    let mut model = CausalModel::new("m");
    let e = model.add_entity("e");
    let narrow = model.add_quantity(e, "narrow", Domain::ZeroPositive).unwrap();
    let wide = model
        .add_quantity(e, "wide", Domain::ZeroPositiveMax)
        .unwrap();

    // Max is not a landmark of the zero/positive domain.
    let err = model
        .add_correspondence(narrow, Magnitude::Max, wide, Magnitude::Zero)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MagnitudeOutOfDomain { .. }));

    let err = model
        .add_correspondence(wide, Magnitude::Zero, narrow, Magnitude::Max)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MagnitudeOutOfDomain { .. }));
}

#[test]
fn check_fires_only_when_antecedent_holds() {
    let mut model = two_level_model();
    let left = model.quantity_id("left").unwrap();
    let right = model.quantity_id("right").unwrap();
    model
        .add_correspondence(left, Magnitude::Max, right, Magnitude::Max)
        .unwrap();

    // Antecedent not held: passes whatever right holds.
    assert!(model.check_correspondences(|id| {
        if id == left {
            Magnitude::Positive
        } else {
            Magnitude::Zero
        }
    }));

    // Antecedent held, consequent wrong: fails.
    assert!(!model.check_correspondences(|id| {
        if id == left {
            Magnitude::Max
        } else {
            Magnitude::Zero
        }
    }));

    // Antecedent held, consequent right: passes.
    assert!(model.check_correspondences(|_| Magnitude::Max));
}

#[test]
fn correspondences_are_directional() {
    let mut model = two_level_model();
    let left = model.quantity_id("left").unwrap();
    let right = model.quantity_id("right").unwrap();
    model
        .add_correspondence(left, Magnitude::Zero, right, Magnitude::Zero)
        .unwrap();

    // right holding zero does not constrain left.
    assert!(model.check_correspondences(|id| {
        if id == right {
            Magnitude::Zero
        } else {
            Magnitude::Max
        }
    }));
}

#[test]
fn symmetric_constraints_need_two_registrations() {
    let mut model = two_level_model();
    let left = model.quantity_id("left").unwrap();
    let right = model.quantity_id("right").unwrap();
    model
        .add_correspondence(left, Magnitude::Zero, right, Magnitude::Zero)
        .unwrap();
    model
        .add_correspondence(right, Magnitude::Zero, left, Magnitude::Zero)
        .unwrap();

    // Now either side holding zero forces the other.
    assert!(!model.check_correspondences(|id| {
        if id == right {
            Magnitude::Zero
        } else {
            Magnitude::Max
        }
    }));
    assert!(!model.check_correspondences(|id| {
        if id == left {
            Magnitude::Zero
        } else {
            Magnitude::Max
        }
    }));
}

#[test]
fn multiple_constraints_all_checked() {
    let mut model = two_level_model();
    let left = model.quantity_id("left").unwrap();
    let right = model.quantity_id("right").unwrap();
    model
        .add_correspondence(left, Magnitude::Zero, right, Magnitude::Zero)
        .unwrap();
    model
        .add_correspondence(left, Magnitude::Max, right, Magnitude::Max)
        .unwrap();

    assert!(model.check_correspondences(|_| Magnitude::Zero));
    assert!(model.check_correspondences(|_| Magnitude::Max));
    assert!(!model.check_correspondences(|id| {
        if id == left {
            Magnitude::Max
        } else {
            Magnitude::Positive
        }
    }));
}
