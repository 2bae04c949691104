//! Error types for the Envision system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Two conditions that look error-like are deliberately *not* errors:
//! ambiguous derivative propagation (a branching outcome, see the engine
//! crate) and duplicate relation/correspondence registration (a silent
//! no-op, matching the model-authoring contract).

use thiserror::Error;

use crate::intern::QuantityId;
use crate::qual::{Domain, Magnitude};

/// Convenience alias used across all Envision crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Envision operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a magnitude-out-of-domain error.
    #[must_use]
    pub fn magnitude_out_of_domain(quantity: String, magnitude: Magnitude, domain: Domain) -> Self {
        Self::new(ErrorKind::MagnitudeOutOfDomain {
            quantity,
            magnitude,
            domain,
        })
    }

    /// Creates an unknown quantity error.
    #[must_use]
    pub fn unknown_quantity(name: String) -> Self {
        Self::new(ErrorKind::UnknownQuantity(name))
    }

    /// Creates an unknown quantity-id error.
    #[must_use]
    pub fn unknown_quantity_id(id: QuantityId) -> Self {
        Self::new(ErrorKind::UnknownQuantityId(id))
    }

    /// Creates an unknown entity error.
    #[must_use]
    pub fn unknown_entity(index: usize) -> Self {
        Self::new(ErrorKind::UnknownEntity(index))
    }

    /// Creates a duplicate quantity error.
    #[must_use]
    pub fn duplicate_quantity(name: String) -> Self {
        Self::new(ErrorKind::DuplicateQuantity(name))
    }

    /// Creates an unassigned quantity error.
    #[must_use]
    pub fn unassigned_quantity(name: String) -> Self {
        Self::new(ErrorKind::UnassignedQuantity(name))
    }

    /// Creates a state arity mismatch error.
    #[must_use]
    pub fn state_arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::StateArityMismatch { expected, actual })
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled(explored: usize) -> Self {
        Self::new(ErrorKind::Cancelled { explored })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A magnitude outside the quantity's declared domain.
    #[error("magnitude {magnitude} is outside domain {domain} of quantity {quantity}")]
    MagnitudeOutOfDomain {
        /// Name of the offending quantity.
        quantity: String,
        /// The rejected magnitude.
        magnitude: Magnitude,
        /// The quantity's declared domain.
        domain: Domain,
    },

    /// A relation or correspondence references a quantity name not
    /// registered in the model.
    #[error("unknown quantity: {0}")]
    UnknownQuantity(String),

    /// A quantity id that does not resolve in the model.
    #[error("unknown quantity id: {0:?}")]
    UnknownQuantityId(QuantityId),

    /// An entity index that does not resolve in the model.
    #[error("unknown entity index: {0}")]
    UnknownEntity(usize),

    /// A quantity name registered twice in one model.
    #[error("duplicate quantity: {0}")]
    DuplicateQuantity(String),

    /// A state was built without assigning every quantity.
    #[error("quantity {0} has no assigned value in the initial state")]
    UnassignedQuantity(String),

    /// A state's quantity count does not match the model's.
    #[error("state arity mismatch: model has {expected} quantities, state has {actual}")]
    StateArityMismatch {
        /// Quantity count in the model.
        expected: usize,
        /// Quantity count in the state.
        actual: usize,
    },

    /// Graph generation was cancelled by the caller.
    #[error("generation cancelled after exploring {explored} states")]
    Cancelled {
        /// States fully explored before the cancellation flag tripped.
        explored: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
