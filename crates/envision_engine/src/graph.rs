//! The behavior graph: the output of exhaustive qualitative simulation.
//!
//! A behavior graph is a set of structurally distinct states plus the
//! directed transition edges between them. Both sets are deduplicated by
//! structural equality; no edge connects a state to itself.

use std::collections::HashSet;

use envision_model::CausalModel;

use crate::state::{State, StateTriple};

/// The set of reachable states and transitions of one generation run.
#[derive(Clone, Debug, Default)]
pub struct BehaviorGraph {
    /// Distinct reachable states.
    states: HashSet<State>,
    /// Directed transition edges, deduplicated by `(from, to)`.
    edges: HashSet<(State, State)>,
}

impl BehaviorGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a state. Returns true if it was not present yet.
    pub(crate) fn insert_state(&mut self, state: State) -> bool {
        self.states.insert(state)
    }

    /// Records a directed edge. Returns true if it was not present yet.
    pub(crate) fn insert_edge(&mut self, from: State, to: State) -> bool {
        debug_assert_ne!(from, to, "behavior graphs have no self-edges");
        self.edges.insert((from, to))
    }

    /// Returns the number of distinct states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph contains a structurally equal state.
    #[must_use]
    pub fn contains_state(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// Returns true if the graph contains the directed edge.
    #[must_use]
    pub fn contains_edge(&self, from: &State, to: &State) -> bool {
        self.edges.contains(&(from.clone(), to.clone()))
    }

    /// Iterates over the states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Iterates over the edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &(State, State)> {
        self.edges.iter()
    }

    /// Returns the direct successors of `state` recorded in the graph.
    #[must_use]
    pub fn successors_of(&self, state: &State) -> Vec<&State> {
        self.edges
            .iter()
            .filter(|(from, _)| from == state)
            .map(|(_, to)| to)
            .collect()
    }

    /// Serializes every edge to the interchange form: a pair of ordered
    /// `(name, magnitude, derivative)` triple sequences.
    #[must_use]
    pub fn edge_triples(&self, model: &CausalModel) -> Vec<(Vec<StateTriple>, Vec<StateTriple>)> {
        self.edges
            .iter()
            .map(|(from, to)| (from.triples(model), to.triples(model)))
            .collect()
    }
}
