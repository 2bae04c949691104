//! Next-state enumeration.
//!
//! Successor candidates are the Cartesian product of every quantity's
//! admissible `(magnitude, derivative)` pairs, computed independently
//! against the expanded-from state. Candidates structurally equal to the
//! source state (self-transitions) or violating a correspondence
//! constraint are discarded; each survivor is materialized as a new,
//! independently-owned state.

use envision_foundation::{QuantityId, Result};
use envision_model::CausalModel;

use crate::state::{QuantityState, State};
use crate::transition::candidate_states;

/// Computes the successor set of `state` under `model`.
///
/// The result is deterministic: candidates appear in the lexicographic
/// order induced by the per-quantity candidate orderings.
///
/// # Errors
///
/// Returns [`ErrorKind::StateArityMismatch`] if the state does not cover
/// every model quantity, and propagates transition-rule lookup errors.
///
/// [`ErrorKind::StateArityMismatch`]: envision_foundation::ErrorKind::StateArityMismatch
pub fn successors(model: &CausalModel, state: &State) -> Result<Vec<State>> {
    let count = model.quantity_count();

    // Per-quantity admissible pairs, computed against the source state
    // only (never against a partially-built candidate).
    let mut per_quantity: Vec<Vec<QuantityState>> = Vec::with_capacity(count);
    for def in model.quantities() {
        per_quantity.push(candidate_states(model, state, def.id())?);
    }

    // Cartesian product across quantities.
    let mut prefixes: Vec<im::Vector<QuantityState>> = vec![im::Vector::new()];
    for candidates in &per_quantity {
        let mut extended = Vec::with_capacity(prefixes.len() * candidates.len());
        for prefix in &prefixes {
            for &pair in candidates {
                let mut next = prefix.clone();
                next.push_back(pair);
                extended.push(next);
            }
        }
        prefixes = extended;
    }

    // Filter: no self-transitions, no correspondence violations.
    let mut survivors = Vec::new();
    for pairs in prefixes {
        let candidate = State::from_vector(pairs);
        if candidate == *state {
            continue;
        }
        if !model.check_correspondences(|id| magnitude_in(&candidate, id)) {
            continue;
        }
        survivors.push(candidate);
    }
    Ok(survivors)
}

/// Magnitude lookup for the correspondence filter. The candidate covers
/// every model quantity by construction.
fn magnitude_in(candidate: &State, id: QuantityId) -> envision_foundation::Magnitude {
    candidate
        .get(id)
        .expect("candidate state covers every model quantity")
        .magnitude
}
