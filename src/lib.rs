//! Envision - Qualitative-reasoning simulator
//!
//! This crate re-exports all layers of the Envision system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: envision_engine     — States, transition rules, behavior graphs
//! Layer 1: envision_model      — Quantities, entities, relations, constraints
//! Layer 0: envision_foundation — Core types (Magnitude, QuantityId, Error)
//! ```

pub use envision_engine as engine;
pub use envision_foundation as foundation;
pub use envision_model as model;

use envision_engine::{BehaviorGraph, Generator, State};
use envision_foundation::Result;
use envision_model::CausalModel;

/// Generates the full behavior graph of `model` reachable from `initial`.
///
/// Convenience wrapper over [`Generator`]; see [`Generator::generate`] for
/// semantics and error conditions.
///
/// # Errors
///
/// Propagates the errors of [`Generator::generate`].
pub fn generate_states(model: &CausalModel, initial: &State) -> Result<BehaviorGraph> {
    Generator::new(model).generate(initial)
}
