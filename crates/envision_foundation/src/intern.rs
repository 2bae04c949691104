//! Name interning for quantities.
//!
//! Quantity names are resolved to dense integer handles exactly once, at
//! model-assembly time. Relations, correspondences, and states are all
//! indexed by [`QuantityId`], so no string comparison happens inside the
//! exploration loop.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned quantity identifier.
///
/// Ids are dense: the n-th quantity registered in a model receives id n,
/// which doubles as its index into every [`State`] of that model.
///
/// [`State`]: https://docs.rs/envision_engine
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantityId(pub(crate) u32);

impl QuantityId {
    /// Creates an id from a raw index.
    ///
    /// The index must have been produced by an [`Interner`] of the same
    /// model; ids from different models do not resolve.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this quantity.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for QuantityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuantityId({})", self.0)
    }
}

/// Interner mapping quantity names to [`QuantityId`]s and back.
///
/// Not thread-safe; models are assembled single-threaded and the interner
/// is read-only afterwards.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interner {
    /// Name storage, indexed by id.
    names: Vec<Arc<str>>,
    /// Map from name to id.
    name_to_id: HashMap<Arc<str>, QuantityId>,
}

impl Interner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a quantity name, returning its [`QuantityId`].
    ///
    /// Re-interning an existing name returns the same id.
    ///
    /// # Panics
    ///
    /// Panics if the number of interned names exceeds `u32::MAX`.
    pub fn intern(&mut self, name: &str) -> QuantityId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let idx = u32::try_from(self.names.len()).expect("too many interned names");
        let arc: Arc<str> = name.into();
        self.names.push(arc.clone());

        let id = QuantityId(idx);
        self.name_to_id.insert(arc, id);
        id
    }

    /// Looks up the id for a name without interning it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<QuantityId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns true if the name has been interned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Gets the name for an id.
    #[must_use]
    pub fn get(&self, id: QuantityId) -> Option<&str> {
        self.names.get(id.index()).map(AsRef::as_ref)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, name)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (QuantityId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (QuantityId(u32::try_from(i).unwrap_or(u32::MAX)), name.as_ref()))
    }
}
