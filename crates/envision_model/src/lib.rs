//! Causal model layer for Envision.
//!
//! This crate provides:
//! - [`QuantityDef`] - Immutable per-quantity declarations (domain, exogeneity)
//! - [`Entity`] - Named groupings of quantities
//! - [`RelationKind`] / [`CausalRelation`] - Influence and proportionality relations
//! - [`Correspondence`] - Directional value-correspondence constraints
//! - [`CausalModel`] - The owning registry, read-only once assembled

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod correspondence;
pub mod entity;
pub mod model;
pub mod quantity;
pub mod relation;

pub use correspondence::{Correspondence, CorrespondenceTable};
pub use entity::{Entity, EntityId};
pub use model::CausalModel;
pub use quantity::QuantityDef;
pub use relation::{CausalRelation, RelationKind, RelationTable};
