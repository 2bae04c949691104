//! Causal relations: influences and proportionalities.
//!
//! A relation is directed from a source quantity to the quantity whose
//! derivative it influences. The table is keyed by the *target*, because
//! derivative propagation asks "who influences me?" for one quantity at a
//! time.

use std::fmt;

use envision_foundation::{DerivativeSign, QuantityId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four recognized relation kinds.
///
/// Influences (`I+`/`I-`) vote on the *magnitude* of the source;
/// proportionalities (`P+`/`P-`) vote on its *derivative*.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelationKind {
    /// Positive influence: a nonzero source magnitude pushes the target
    /// derivative up.
    InfluencePositive,
    /// Negative influence: a nonzero source magnitude pushes the target
    /// derivative down.
    InfluenceNegative,
    /// Positive proportionality: a moving source propagates its direction
    /// of change to the target.
    ProportionalPositive,
    /// Negative proportionality: a moving source propagates the opposite
    /// direction of change to the target.
    ProportionalNegative,
}

impl RelationKind {
    /// Returns true for `I+`/`I-`.
    #[must_use]
    pub const fn is_influence(self) -> bool {
        matches!(self, Self::InfluencePositive | Self::InfluenceNegative)
    }

    /// Returns true for `P+`/`P-`.
    #[must_use]
    pub const fn is_proportionality(self) -> bool {
        !self.is_influence()
    }

    /// Returns the direction this kind votes when it fires.
    #[must_use]
    pub const fn vote(self) -> DerivativeSign {
        match self {
            Self::InfluencePositive | Self::ProportionalPositive => DerivativeSign::Positive,
            Self::InfluenceNegative | Self::ProportionalNegative => DerivativeSign::Negative,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfluencePositive => write!(f, "I+"),
            Self::InfluenceNegative => write!(f, "I-"),
            Self::ProportionalPositive => write!(f, "P+"),
            Self::ProportionalNegative => write!(f, "P-"),
        }
    }
}

/// A directed causal relation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CausalRelation {
    /// The quantity whose magnitude or derivative drives the vote.
    pub source: QuantityId,
    /// The relation kind.
    pub kind: RelationKind,
    /// The quantity whose derivative receives the vote.
    pub target: QuantityId,
}

/// Relation registry keyed by target quantity.
///
/// Immutable after model assembly. Duplicate `(kind, source)` entries for
/// one target are ignored silently.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationTable {
    /// Incoming relations per target id, in registration order.
    incoming: Vec<Vec<(RelationKind, QuantityId)>>,
}

impl RelationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the table to cover `count` quantities.
    pub(crate) fn resize(&mut self, count: usize) {
        if self.incoming.len() < count {
            self.incoming.resize_with(count, Vec::new);
        }
    }

    /// Registers a relation. Duplicates are a no-op.
    pub(crate) fn add(&mut self, relation: CausalRelation) {
        self.resize(relation.target.index() + 1);
        let entry = (relation.kind, relation.source);
        let slot = &mut self.incoming[relation.target.index()];
        if !slot.contains(&entry) {
            slot.push(entry);
        }
    }

    /// Returns the incoming relations of `target`, in registration order.
    #[must_use]
    pub fn incoming(&self, target: QuantityId) -> &[(RelationKind, QuantityId)] {
        self.incoming
            .get(target.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the total number of registered relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incoming.iter().map(Vec::len).sum()
    }

    /// Returns true if no relation has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every registered relation.
    ///
    /// # Panics
    ///
    /// Panics if the table covers more than `u32::MAX` quantities, which
    /// the interner already prevents.
    pub fn iter(&self) -> impl Iterator<Item = CausalRelation> + '_ {
        self.incoming.iter().enumerate().flat_map(|(index, slot)| {
            let target =
                QuantityId::from_index(u32::try_from(index).expect("table index fits in u32"));
            slot.iter().map(move |&(kind, source)| CausalRelation {
                source,
                kind,
                target,
            })
        })
    }
}
