//! Simulation engine for Envision.
//!
//! This crate provides:
//! - [`State`] / [`StateBuilder`] - Immutable qualitative state snapshots
//! - [`DerivativeOutcome`] - Derivative propagation with branch-on-ambiguity
//! - Per-quantity transition rules (value continuity, boundary correction)
//! - [`successors`] - Cartesian next-state enumeration with constraint filtering
//! - [`Generator`] / [`BehaviorGraph`] - Breadth-first fixpoint exploration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod generate;
pub mod graph;
pub mod state;
pub mod successor;
pub mod transition;

pub use generate::Generator;
pub use graph::BehaviorGraph;
pub use state::{QuantityState, State, StateBuilder, StateTriple};
pub use successor::successors;
pub use transition::{
    DerivativeOutcome, admissible_values, boundary_correct, candidate_states, propagate_derivative,
};
