//! The causal model: the owning registry of entities, quantities,
//! relations, and correspondences.
//!
//! A model is assembled single-threaded through the `add_*` calls, then
//! treated as read-only for the lifetime of every simulation run. All
//! name resolution happens here, once, at registration time; the
//! exploration loop only ever sees [`QuantityId`]s.

use envision_foundation::{Domain, Error, Interner, Magnitude, QuantityId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::correspondence::{Correspondence, CorrespondenceTable};
use crate::entity::{Entity, EntityId};
use crate::quantity::QuantityDef;
use crate::relation::{CausalRelation, RelationKind, RelationTable};

/// A causal model of qualitatively interacting quantities.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CausalModel {
    /// Model name, for diagnostics only.
    name: String,
    /// Name-to-id resolution, filled at registration time.
    interner: Interner,
    /// Entities in registration order.
    entities: Vec<Entity>,
    /// Quantity declarations indexed by [`QuantityId`].
    quantities: Vec<QuantityDef>,
    /// Incoming relations keyed by target.
    relations: RelationTable,
    /// Correspondences keyed by antecedent.
    correspondences: CorrespondenceTable,
}

impl CausalModel {
    /// Creates a new empty model.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            interner: Interner::new(),
            entities: Vec::new(),
            quantities: Vec::new(),
            relations: RelationTable::new(),
            correspondences: CorrespondenceTable::new(),
        }
    }

    /// Returns the model's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    /// Adds an entity and returns its id.
    pub fn add_entity(&mut self, name: &str) -> EntityId {
        let id = EntityId(u32::try_from(self.entities.len()).expect("too many entities"));
        self.entities.push(Entity::new(name));
        id
    }

    /// Registers a quantity under `entity` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownEntity`] if `entity` does not resolve,
    /// and [`ErrorKind::DuplicateQuantity`] if the name is already taken.
    ///
    /// [`ErrorKind::UnknownEntity`]: envision_foundation::ErrorKind::UnknownEntity
    /// [`ErrorKind::DuplicateQuantity`]: envision_foundation::ErrorKind::DuplicateQuantity
    pub fn add_quantity(
        &mut self,
        entity: EntityId,
        name: &str,
        domain: Domain,
    ) -> Result<QuantityId> {
        if entity.index() >= self.entities.len() {
            return Err(Error::unknown_entity(entity.index()));
        }
        if self.interner.contains(name) {
            return Err(Error::duplicate_quantity(name.to_string()));
        }

        let id = self.interner.intern(name);
        debug_assert_eq!(id.index(), self.quantities.len());

        self.quantities.push(QuantityDef::new(id, domain));
        self.entities[entity.index()].push_quantity(id);
        self.relations.resize(self.quantities.len());
        self.correspondences.resize(self.quantities.len());
        Ok(id)
    }

    /// Marks a quantity as exogenous: its derivative is externally driven
    /// and enumerated rather than derived from relations.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantityId`] if `id` does not resolve.
    ///
    /// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
    pub fn mark_exogenous(&mut self, id: QuantityId) -> Result<()> {
        let def = self
            .quantities
            .get_mut(id.index())
            .ok_or_else(|| Error::unknown_quantity_id(id))?;
        def.mark_exogenous();
        Ok(())
    }

    /// Registers a relation from `source` to `target`.
    ///
    /// Duplicate `(kind, source)` pairs for one target are silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantityId`] if either endpoint does
    /// not resolve in this model.
    ///
    /// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
    pub fn add_relation(
        &mut self,
        source: QuantityId,
        kind: RelationKind,
        target: QuantityId,
    ) -> Result<()> {
        self.require_quantity(source)?;
        self.require_quantity(target)?;
        self.relations.add(CausalRelation {
            source,
            kind,
            target,
        });
        Ok(())
    }

    /// Registers a directional correspondence: whenever `antecedent` holds
    /// `antecedent_magnitude`, `consequent` must hold
    /// `consequent_magnitude`.
    ///
    /// `A => B` does not imply `B => A`; symmetric constraints need two
    /// registrations. Duplicates are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantityId`] if either quantity does
    /// not resolve, and [`ErrorKind::MagnitudeOutOfDomain`] if either
    /// magnitude is outside the respective quantity's domain.
    ///
    /// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
    /// [`ErrorKind::MagnitudeOutOfDomain`]: envision_foundation::ErrorKind::MagnitudeOutOfDomain
    pub fn add_correspondence(
        &mut self,
        antecedent: QuantityId,
        antecedent_magnitude: Magnitude,
        consequent: QuantityId,
        consequent_magnitude: Magnitude,
    ) -> Result<()> {
        self.require_magnitude(antecedent, antecedent_magnitude)?;
        self.require_magnitude(consequent, consequent_magnitude)?;
        self.correspondences.add(Correspondence {
            antecedent,
            antecedent_magnitude,
            consequent,
            consequent_magnitude,
        });
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the declaration for a quantity id.
    #[must_use]
    pub fn quantity(&self, id: QuantityId) -> Option<&QuantityDef> {
        self.quantities.get(id.index())
    }

    /// Resolves a quantity name to its id.
    #[must_use]
    pub fn quantity_id(&self, name: &str) -> Option<QuantityId> {
        self.interner.lookup(name)
    }

    /// Returns the name of a quantity id.
    #[must_use]
    pub fn quantity_name(&self, id: QuantityId) -> Option<&str> {
        self.interner.get(id)
    }

    /// Returns the number of registered quantities.
    #[must_use]
    pub fn quantity_count(&self) -> usize {
        self.quantities.len()
    }

    /// Iterates over all quantity declarations in registration order.
    pub fn quantities(&self) -> impl Iterator<Item = &QuantityDef> {
        self.quantities.iter()
    }

    /// Returns the entities of this model in registration order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the incoming relations of `target`.
    #[must_use]
    pub fn relations_into(&self, target: QuantityId) -> &[(RelationKind, QuantityId)] {
        self.relations.incoming(target)
    }

    /// Returns the relation registry.
    #[must_use]
    pub fn relations(&self) -> &RelationTable {
        &self.relations
    }

    /// Returns the correspondence registry.
    #[must_use]
    pub fn correspondences(&self) -> &CorrespondenceTable {
        &self.correspondences
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Checks every registered correspondence against a candidate
    /// assignment of magnitudes.
    ///
    /// Returns false if any constraint is violated; never errors.
    pub fn check_correspondences<F>(&self, magnitude_of: F) -> bool
    where
        F: Fn(QuantityId) -> Magnitude,
    {
        self.correspondences.check(magnitude_of)
    }

    /// Validates that `magnitude` is a landmark of `id`'s domain.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownQuantityId`] or
    /// [`ErrorKind::MagnitudeOutOfDomain`].
    ///
    /// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
    /// [`ErrorKind::MagnitudeOutOfDomain`]: envision_foundation::ErrorKind::MagnitudeOutOfDomain
    pub fn require_magnitude(&self, id: QuantityId, magnitude: Magnitude) -> Result<()> {
        let def = self.require_quantity(id)?;
        if def.accepts(magnitude) {
            Ok(())
        } else {
            let name = self.quantity_name(id).unwrap_or("<unknown>").to_string();
            Err(Error::magnitude_out_of_domain(
                name,
                magnitude,
                def.domain(),
            ))
        }
    }

    fn require_quantity(&self, id: QuantityId) -> Result<&QuantityDef> {
        self.quantities
            .get(id.index())
            .ok_or_else(|| Error::unknown_quantity_id(id))
    }
}
