//! Immutable quantity declarations.
//!
//! A quantity's magnitude and derivative live in state snapshots, never
//! here; the declaration only fixes what the quantity *is*: its identity,
//! its domain of landmark values, and whether its derivative is externally
//! driven.

use envision_foundation::{Domain, Magnitude, QuantityId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable quantity declaration.
///
/// Created once at model-assembly time and never mutated afterwards
/// (except for [`CausalModel::mark_exogenous`] before assembly finishes),
/// so states on different branches can never alias through it.
///
/// [`CausalModel::mark_exogenous`]: crate::CausalModel::mark_exogenous
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantityDef {
    /// The interned identity of this quantity.
    id: QuantityId,
    /// The ordered landmark domain.
    domain: Domain,
    /// True if the derivative is externally driven rather than explained
    /// by incoming relations.
    exogenous: bool,
}

impl QuantityDef {
    /// Creates a new quantity declaration.
    #[must_use]
    pub const fn new(id: QuantityId, domain: Domain) -> Self {
        Self {
            id,
            domain,
            exogenous: false,
        }
    }

    /// Returns the quantity's id.
    #[must_use]
    pub const fn id(&self) -> QuantityId {
        self.id
    }

    /// Returns the quantity's domain.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns true if the quantity's derivative is externally driven.
    #[must_use]
    pub const fn is_exogenous(&self) -> bool {
        self.exogenous
    }

    /// Marks the quantity as exogenous.
    pub(crate) fn mark_exogenous(&mut self) {
        self.exogenous = true;
    }

    /// Returns true if `magnitude` is a landmark of this quantity's domain.
    #[must_use]
    pub const fn accepts(&self, magnitude: Magnitude) -> bool {
        self.domain.contains(magnitude)
    }

    /// Returns true if a landmark exists above `magnitude`.
    #[must_use]
    pub fn can_increase(&self, magnitude: Magnitude) -> bool {
        self.domain.step_up(magnitude).is_some()
    }

    /// Returns true if a landmark exists below `magnitude`.
    #[must_use]
    pub fn can_decrease(&self, magnitude: Magnitude) -> bool {
        self.domain.step_down(magnitude).is_some()
    }
}
