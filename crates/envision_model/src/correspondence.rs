//! Value-correspondence constraints.
//!
//! A correspondence `(A, vA) => (B, vB)` states that whenever quantity A
//! holds magnitude vA in a state, quantity B must hold magnitude vB.
//! Correspondences are *directional*: registering `A => B` says nothing
//! about states where B holds vB. Symmetric constraints need two explicit
//! registrations; that asymmetry is part of the model-authoring contract.

use envision_foundation::{Magnitude, QuantityId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single directional value correspondence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Correspondence {
    /// The quantity whose magnitude triggers the constraint.
    pub antecedent: QuantityId,
    /// The triggering magnitude.
    pub antecedent_magnitude: Magnitude,
    /// The quantity the constraint binds.
    pub consequent: QuantityId,
    /// The magnitude the consequent must hold when the constraint fires.
    pub consequent_magnitude: Magnitude,
}

/// Correspondence registry keyed by the antecedent quantity.
///
/// Immutable after model assembly. Duplicate registrations are ignored
/// silently.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrespondenceTable {
    /// Constraints per antecedent id, in registration order.
    by_antecedent: Vec<Vec<(Magnitude, QuantityId, Magnitude)>>,
}

impl CorrespondenceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the table to cover `count` quantities.
    pub(crate) fn resize(&mut self, count: usize) {
        if self.by_antecedent.len() < count {
            self.by_antecedent.resize_with(count, Vec::new);
        }
    }

    /// Registers a correspondence. Duplicates are a no-op.
    pub(crate) fn add(&mut self, correspondence: Correspondence) {
        self.resize(correspondence.antecedent.index() + 1);
        let entry = (
            correspondence.antecedent_magnitude,
            correspondence.consequent,
            correspondence.consequent_magnitude,
        );
        let slot = &mut self.by_antecedent[correspondence.antecedent.index()];
        if !slot.contains(&entry) {
            slot.push(entry);
        }
    }

    /// Returns the constraints triggered by `antecedent`, in registration
    /// order.
    #[must_use]
    pub fn for_antecedent(&self, antecedent: QuantityId) -> &[(Magnitude, QuantityId, Magnitude)] {
        self.by_antecedent
            .get(antecedent.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the total number of registered correspondences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_antecedent.iter().map(Vec::len).sum()
    }

    /// Returns true if no correspondence has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every registered correspondence against a candidate
    /// assignment of magnitudes.
    ///
    /// `magnitude_of` maps a quantity id to its magnitude in the candidate
    /// state. Returns false on the first violated constraint; never errors.
    pub fn check<F>(&self, magnitude_of: F) -> bool
    where
        F: Fn(QuantityId) -> Magnitude,
    {
        for (index, slot) in self.by_antecedent.iter().enumerate() {
            if slot.is_empty() {
                continue;
            }
            let antecedent =
                QuantityId::from_index(u32::try_from(index).expect("table index fits in u32"));
            let held = magnitude_of(antecedent);
            for &(trigger, consequent, required) in slot {
                if held == trigger && magnitude_of(consequent) != required {
                    return false;
                }
            }
        }
        true
    }
}
