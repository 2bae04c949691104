//! Immutable qualitative state snapshots.
//!
//! A state fixes one `(magnitude, derivative)` pair per quantity in the
//! model, indexed by [`QuantityId`]. States are persistent vectors with
//! structural sharing: cloning is O(1) and branching never aliases mutable
//! data between sibling branches. Equality and hashing are structural,
//! over the pair sequence.

use std::fmt;

use envision_foundation::{DerivativeSign, Error, Magnitude, QuantityId, Result};
use envision_model::CausalModel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The `(magnitude, derivative)` pair of one quantity in one state.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantityState {
    /// The quantity's magnitude.
    pub magnitude: Magnitude,
    /// The quantity's derivative sign.
    pub derivative: DerivativeSign,
}

impl QuantityState {
    /// Creates a quantity state.
    #[must_use]
    pub const fn new(magnitude: Magnitude, derivative: DerivativeSign) -> Self {
        Self {
            magnitude,
            derivative,
        }
    }
}

impl fmt::Debug for QuantityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.magnitude, self.derivative)
    }
}

/// An immutable snapshot of every quantity's `(magnitude, derivative)`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(im::Vector<QuantityState>);

impl State {
    /// Builds a state directly from a pair sequence, one entry per
    /// quantity in id order.
    #[must_use]
    pub fn from_vector(pairs: im::Vector<QuantityState>) -> Self {
        Self(pairs)
    }

    /// Returns the number of quantities in this state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the state covers no quantities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the pair for a quantity, if the id is covered.
    #[must_use]
    pub fn get(&self, id: QuantityId) -> Option<QuantityState> {
        self.0.get(id.index()).copied()
    }

    /// Returns a new state with one quantity's pair replaced.
    ///
    /// Returns `None` if the id is not covered.
    #[must_use]
    pub fn with(&self, id: QuantityId, pair: QuantityState) -> Option<Self> {
        if id.index() >= self.0.len() {
            return None;
        }
        let mut next = self.0.clone();
        next.set(id.index(), pair);
        Some(Self(next))
    }

    /// Iterates over `(id, pair)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuantityId, QuantityState)> + '_ {
        self.0.iter().enumerate().map(|(i, &pair)| {
            let id = QuantityId::from_index(u32::try_from(i).expect("state index fits in u32"));
            (id, pair)
        })
    }

    /// Serializes this state to the interchange form: an ordered sequence
    /// of `(name, magnitude, derivative)` triples.
    ///
    /// Quantities the model cannot name (foreign ids) are skipped; for a
    /// state produced against `model` this never happens.
    #[must_use]
    pub fn triples(&self, model: &CausalModel) -> Vec<StateTriple> {
        self.iter()
            .filter_map(|(id, pair)| {
                model.quantity_name(id).map(|name| StateTriple {
                    name: name.to_string(),
                    magnitude: pair.magnitude,
                    derivative: pair.derivative,
                })
            })
            .collect()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// One entry of the interchange form of a state.
///
/// This tuple shape is the stable contract between the engine and any
/// downstream reporting or visualization tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateTriple {
    /// Quantity name.
    pub name: String,
    /// Magnitude held in the state.
    pub magnitude: Magnitude,
    /// Derivative sign held in the state.
    pub derivative: DerivativeSign,
}

/// Builder for an initial [`State`], validating every assignment against
/// the model.
#[derive(Debug)]
pub struct StateBuilder<'a> {
    /// The model the state is built for.
    model: &'a CausalModel,
    /// One slot per quantity, in id order.
    slots: Vec<Option<QuantityState>>,
}

impl<'a> StateBuilder<'a> {
    /// Creates a builder with every quantity unassigned.
    #[must_use]
    pub fn new(model: &'a CausalModel) -> Self {
        Self {
            model,
            slots: vec![None; model.quantity_count()],
        }
    }

    /// Assigns a quantity's pair.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantityId`] if `id` does not resolve
    /// in the model, and [`ErrorKind::MagnitudeOutOfDomain`] if the
    /// magnitude is not a landmark of the quantity's domain.
    ///
    /// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
    /// [`ErrorKind::MagnitudeOutOfDomain`]: envision_foundation::ErrorKind::MagnitudeOutOfDomain
    pub fn set(
        &mut self,
        id: QuantityId,
        magnitude: Magnitude,
        derivative: DerivativeSign,
    ) -> Result<&mut Self> {
        self.model.require_magnitude(id, magnitude)?;
        self.slots[id.index()] = Some(QuantityState::new(magnitude, derivative));
        Ok(self)
    }

    /// Assigns a quantity's pair by name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantity`] if the name is not
    /// registered, plus the errors of [`StateBuilder::set`].
    ///
    /// [`ErrorKind::UnknownQuantity`]: envision_foundation::ErrorKind::UnknownQuantity
    pub fn set_by_name(
        &mut self,
        name: &str,
        magnitude: Magnitude,
        derivative: DerivativeSign,
    ) -> Result<&mut Self> {
        let id = self
            .model
            .quantity_id(name)
            .ok_or_else(|| Error::unknown_quantity(name.to_string()))?;
        self.set(id, magnitude, derivative)
    }

    /// Finishes the build.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnassignedQuantity`] naming the first quantity
    /// without an assigned pair.
    ///
    /// [`ErrorKind::UnassignedQuantity`]: envision_foundation::ErrorKind::UnassignedQuantity
    pub fn build(&self) -> Result<State> {
        let mut pairs = im::Vector::new();
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(pair) => pairs.push_back(*pair),
                None => {
                    let id = QuantityId::from_index(
                        u32::try_from(index).expect("slot index fits in u32"),
                    );
                    let name = self
                        .model
                        .quantity_name(id)
                        .unwrap_or("<unknown>")
                        .to_string();
                    return Err(Error::unassigned_quantity(name));
                }
            }
        }
        Ok(State::from_vector(pairs))
    }
}
