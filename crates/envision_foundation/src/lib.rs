//! Core types for the Envision qualitative-reasoning simulator.
//!
//! This crate provides:
//! - [`Magnitude`], [`Domain`], [`DerivativeSign`] - The qualitative value model
//! - [`QuantityId`] - Interned quantity identifiers
//! - [`Interner`] - Name-to-id resolution, performed once at model assembly
//! - [`Error`] - Error types for the whole workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod intern;
pub mod qual;

pub use error::{Error, ErrorKind, Result};
pub use intern::{Interner, QuantityId};
pub use qual::{DerivativeSign, Domain, Magnitude};
