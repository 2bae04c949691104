//! Breadth-first fixpoint exploration.
//!
//! The generator expands frontier states round by round, deduplicating
//! states and edges by structural equality until no undiscovered state
//! remains. Termination is guaranteed: the reachable space is bounded by
//! `(domain size x 3) ^ quantity_count` and each round strictly shrinks
//! the unexplored remainder.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use envision_foundation::{Error, Result};
use envision_model::CausalModel;

use crate::graph::BehaviorGraph;
use crate::state::State;
use crate::successor::successors;

/// Drives behavior-graph generation for one model.
///
/// The model is borrowed read-only; one generator can run any number of
/// generations, and per-state successor computation is side-effect-free,
/// so the borrow is shareable.
#[derive(Clone, Debug)]
pub struct Generator<'a> {
    /// The model to explore.
    model: &'a CausalModel,
    /// Optional cancellation flag, checked once per exploration round.
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Generator<'a> {
    /// Creates a generator for `model`.
    #[must_use]
    pub fn new(model: &'a CausalModel) -> Self {
        Self {
            model,
            cancel: None,
        }
    }

    /// Attaches a cancellation flag.
    ///
    /// The flag is polled once per exploration round; setting it aborts
    /// generation with [`ErrorKind::Cancelled`]. Intended for callers
    /// exploring pathologically large models from another thread.
    ///
    /// [`ErrorKind::Cancelled`]: envision_foundation::ErrorKind::Cancelled
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Generates the full behavior graph reachable from `initial`.
    ///
    /// The initial state is assumed well-formed: it is not re-checked
    /// against the correspondence constraints. Output content is
    /// deterministic regardless of frontier processing order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::StateArityMismatch`] if the initial state does
    /// not cover every model quantity, and [`ErrorKind::Cancelled`] if the
    /// cancellation flag trips mid-run.
    ///
    /// [`ErrorKind::StateArityMismatch`]: envision_foundation::ErrorKind::StateArityMismatch
    /// [`ErrorKind::Cancelled`]: envision_foundation::ErrorKind::Cancelled
    pub fn generate(&self, initial: &State) -> Result<BehaviorGraph> {
        if initial.len() != self.model.quantity_count() {
            return Err(Error::state_arity_mismatch(
                self.model.quantity_count(),
                initial.len(),
            ));
        }

        let mut graph = BehaviorGraph::new();
        let mut frontier = vec![initial.clone()];

        while !frontier.is_empty() {
            if self.is_cancelled() {
                return Err(Error::cancelled(graph.state_count()));
            }

            let mut next_frontier: Vec<State> = Vec::new();
            for state in frontier {
                // A state queued twice in one round is expanded once.
                if !graph.insert_state(state.clone()) {
                    continue;
                }

                for successor in successors(self.model, &state)? {
                    graph.insert_edge(state.clone(), successor.clone());
                    if !graph.contains_state(&successor) && !next_frontier.contains(&successor) {
                        next_frontier.push(successor);
                    }
                }
            }
            frontier = next_frontier;
        }

        Ok(graph)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
