//! Entities: named groupings of quantities.
//!
//! An entity is a pure namespace with no behavior of its own; it exists so
//! the model can enumerate "all quantities" through entity membership.

use std::fmt;
use std::sync::Arc;

use envision_foundation::QuantityId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an entity within one [`CausalModel`].
///
/// [`CausalModel`]: crate::CausalModel
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Returns the raw index of this entity.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

/// A named grouping of quantities.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    /// The entity's name.
    name: Arc<str>,
    /// Quantities owned by this entity, in registration order.
    quantities: Vec<QuantityId>,
}

impl Entity {
    /// Creates a new empty entity.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            quantities: Vec::new(),
        }
    }

    /// Returns the entity's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quantities owned by this entity, in registration order.
    #[must_use]
    pub fn quantities(&self) -> &[QuantityId] {
        &self.quantities
    }

    /// Records ownership of a quantity.
    pub(crate) fn push_quantity(&mut self, id: QuantityId) {
        self.quantities.push(id);
    }
}
