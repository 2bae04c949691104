//! Per-quantity transition rules.
//!
//! Two independent rules feed successor enumeration:
//!
//! 1. **Derivative propagation** ([`propagate_derivative`]): every incoming
//!    relation casts a directional vote based on the *expanded-from* state;
//!    conflicting votes branch over the full sign set instead of erroring.
//! 2. **Value continuity** ([`admissible_values`]): at each step a quantity
//!    either holds its landmark or crosses to the adjacent one in the
//!    direction of its *resolved next* derivative. A quantity on a domain
//!    extreme must leave it in one step, and a value one step away from the
//!    extreme it is moving toward lands exactly on it.
//!
//! [`boundary_correct`] then zeroes any derivative still pointing past the
//! extreme its value sits on, and [`candidate_states`] combines the two
//! rules into the per-quantity `(magnitude, derivative)` candidate set.

use envision_foundation::{DerivativeSign, Domain, Error, Magnitude, QuantityId, Result};
use envision_model::CausalModel;

use crate::state::{QuantityState, State};

/// Outcome of derivative propagation for one quantity.
///
/// Ambiguity is a branching outcome, never an error: conflicting votes
/// mean all three signs are qualitatively admissible and each becomes its
/// own branch of the behavior graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerivativeOutcome {
    /// Votes agreed (or were absent): a single next derivative.
    Resolved(DerivativeSign),
    /// Both a positive and a negative vote fired: the full sign set
    /// branches.
    Ambiguous([DerivativeSign; 3]),
    /// No votes and the quantity is exogenous: every sign within one step
    /// of the current derivative branches.
    Exogenous(Vec<DerivativeSign>),
}

impl DerivativeOutcome {
    /// Returns the candidate next derivatives, in ascending sign order.
    #[must_use]
    pub fn candidates(&self) -> &[DerivativeSign] {
        match self {
            Self::Resolved(sign) => std::slice::from_ref(sign),
            Self::Ambiguous(all) => all,
            Self::Exogenous(signs) => signs,
        }
    }

    /// Returns true for the conflicting-votes outcome.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }
}

/// Computes the next-derivative outcome for `id`, examining every incoming
/// relation against the state being expanded from.
///
/// - `I+`/`I-` vote when the source's magnitude is not zero.
/// - `P+`/`P-` vote when the source's derivative is not steady.
/// - Mixed votes are ambiguous; one-sided votes step the current
///   derivative one unit toward the vote, saturating at the sign bounds.
/// - No votes leave the derivative unchanged, unless the quantity is
///   exogenous, in which case the derivative's one-step neighborhood is
///   enumerated exhaustively.
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownQuantityId`] if `id` or a relation source
/// is not covered by the model, and [`ErrorKind::StateArityMismatch`] if
/// the state does not cover it.
///
/// [`ErrorKind::UnknownQuantityId`]: envision_foundation::ErrorKind::UnknownQuantityId
/// [`ErrorKind::StateArityMismatch`]: envision_foundation::ErrorKind::StateArityMismatch
pub fn propagate_derivative(
    model: &CausalModel,
    state: &State,
    id: QuantityId,
) -> Result<DerivativeOutcome> {
    let def = model
        .quantity(id)
        .ok_or_else(|| Error::unknown_quantity_id(id))?;
    let current = pair_of(state, id, model)?.derivative;

    let mut positive_vote = false;
    let mut negative_vote = false;
    for &(kind, source) in model.relations_into(id) {
        let source_pair = pair_of(state, source, model)?;
        let fires = if kind.is_influence() {
            source_pair.magnitude != Magnitude::Zero
        } else {
            source_pair.derivative != DerivativeSign::Steady
        };
        if fires {
            match kind.vote() {
                DerivativeSign::Positive => positive_vote = true,
                DerivativeSign::Negative => negative_vote = true,
                DerivativeSign::Steady => {}
            }
        }
    }

    let outcome = match (positive_vote, negative_vote) {
        (true, true) => DerivativeOutcome::Ambiguous(DerivativeSign::ALL),
        (true, false) => DerivativeOutcome::Resolved(current.step_up()),
        (false, true) => DerivativeOutcome::Resolved(current.step_down()),
        (false, false) => {
            if def.is_exogenous() {
                DerivativeOutcome::Exogenous(current.neighbors())
            } else {
                DerivativeOutcome::Resolved(current)
            }
        }
    };
    Ok(outcome)
}

/// Computes the qualitatively admissible next magnitudes for a quantity
/// holding `magnitude` under the resolved next derivative.
///
/// This is the qualitative analogue of continuity:
/// - a steady derivative freezes the magnitude;
/// - a moving quantity already at the extreme it is moving toward stays
///   (the derivative is zeroed separately by [`boundary_correct`]);
/// - a moving quantity *on* the opposite extreme must leave it in one
///   step;
/// - a magnitude one step away from the extreme it is moving toward lands
///   exactly on it, never lingering beside the boundary;
/// - any other interior magnitude may hold or cross.
#[must_use]
pub fn admissible_values(
    domain: Domain,
    magnitude: Magnitude,
    next_derivative: DerivativeSign,
) -> Vec<Magnitude> {
    match next_derivative {
        DerivativeSign::Steady => vec![magnitude],
        DerivativeSign::Negative => match domain.step_down(magnitude) {
            None => vec![magnitude],
            Some(below) => {
                if magnitude == domain.maximum() || below == domain.minimum() {
                    vec![below]
                } else {
                    vec![magnitude, below]
                }
            }
        },
        DerivativeSign::Positive => match domain.step_up(magnitude) {
            None => vec![magnitude],
            Some(above) => {
                if magnitude == domain.minimum() || above == domain.maximum() {
                    vec![above]
                } else {
                    vec![magnitude, above]
                }
            }
        },
    }
}

/// Zeroes a derivative that still points past the extreme its magnitude
/// sits on: a quantity newly at its floor cannot carry a negative
/// derivative forward, and symmetrically at its ceiling.
#[must_use]
pub fn boundary_correct(
    domain: Domain,
    magnitude: Magnitude,
    derivative: DerivativeSign,
) -> QuantityState {
    let pinned = (magnitude == domain.minimum() && derivative == DerivativeSign::Negative)
        || (magnitude == domain.maximum() && derivative == DerivativeSign::Positive);
    if pinned {
        QuantityState::new(magnitude, DerivativeSign::Steady)
    } else {
        QuantityState::new(magnitude, derivative)
    }
}

/// Computes the full per-quantity candidate set: every admissible
/// `(magnitude, derivative)` pair for `id` in the expanded-from state,
/// boundary-corrected and deduplicated, in deterministic order.
///
/// # Errors
///
/// Propagates the errors of [`propagate_derivative`].
pub fn candidate_states(
    model: &CausalModel,
    state: &State,
    id: QuantityId,
) -> Result<Vec<QuantityState>> {
    let def = model
        .quantity(id)
        .ok_or_else(|| Error::unknown_quantity_id(id))?;
    let domain = def.domain();
    let current = pair_of(state, id, model)?;

    let outcome = propagate_derivative(model, state, id)?;
    let mut candidates = Vec::new();
    for &next_derivative in outcome.candidates() {
        for next_magnitude in admissible_values(domain, current.magnitude, next_derivative) {
            let corrected = boundary_correct(domain, next_magnitude, next_derivative);
            if !candidates.contains(&corrected) {
                candidates.push(corrected);
            }
        }
    }
    Ok(candidates)
}

/// Looks up a quantity's pair in the state, reporting a model/state
/// mismatch as an error rather than panicking.
fn pair_of(state: &State, id: QuantityId, model: &CausalModel) -> Result<QuantityState> {
    state
        .get(id)
        .ok_or_else(|| Error::state_arity_mismatch(model.quantity_count(), state.len()))
}
