//! The qualitative value model: magnitudes, domains, and derivative signs.
//!
//! A magnitude is a landmark point from an ordered finite domain; a
//! derivative sign is the qualitative direction of change. Both are small
//! copyable enums with a total order, so states built from them compare
//! and hash structurally.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A qualitative magnitude: a landmark point in an ordered domain.
///
/// Indices are stable: `Zero` = 0, `Positive` = 1, `Max` = 2. Adjacency
/// is "plus or minus one index" within the holding domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Magnitude {
    /// The zero landmark.
    Zero,
    /// The positive landmark (interior of the domain when `Max` exists).
    Positive,
    /// The maximum landmark (only in [`Domain::ZeroPositiveMax`]).
    Max,
}

impl Magnitude {
    /// Returns the ordinal index of this magnitude.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Positive => 1,
            Self::Max => 2,
        }
    }

    /// Returns the magnitude with the given index, if any.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Zero),
            1 => Some(Self::Positive),
            2 => Some(Self::Max),
            _ => None,
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::Positive => write!(f, "positive"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// An ordered finite set of landmark magnitudes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Domain {
    /// The two-point domain `{zero, positive}`.
    ZeroPositive,
    /// The three-point domain `{zero, positive, max}`.
    ZeroPositiveMax,
}

impl Domain {
    /// Parses the compact domain spellings used by model-authoring layers.
    ///
    /// Accepts `"zp"` for [`Domain::ZeroPositive`] and `"zpm"` for
    /// [`Domain::ZeroPositiveMax`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zp" => Some(Self::ZeroPositive),
            "zpm" => Some(Self::ZeroPositiveMax),
            _ => None,
        }
    }

    /// Returns the number of landmarks in this domain.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::ZeroPositive => 2,
            Self::ZeroPositiveMax => 3,
        }
    }

    /// Domains are never empty; provided for clippy symmetry with `len`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns the smallest landmark.
    #[must_use]
    pub const fn minimum(self) -> Magnitude {
        Magnitude::Zero
    }

    /// Returns the largest landmark.
    #[must_use]
    pub const fn maximum(self) -> Magnitude {
        match self {
            Self::ZeroPositive => Magnitude::Positive,
            Self::ZeroPositiveMax => Magnitude::Max,
        }
    }

    /// Returns true if the magnitude is a landmark of this domain.
    #[must_use]
    pub const fn contains(self, magnitude: Magnitude) -> bool {
        magnitude.index() <= self.maximum().index()
    }

    /// Returns the next landmark above `magnitude`, if one exists.
    #[must_use]
    pub fn step_up(self, magnitude: Magnitude) -> Option<Magnitude> {
        if magnitude == self.maximum() {
            None
        } else {
            Magnitude::from_index(magnitude.index() + 1)
        }
    }

    /// Returns the next landmark below `magnitude`, if one exists.
    #[must_use]
    pub fn step_down(self, magnitude: Magnitude) -> Option<Magnitude> {
        if magnitude == self.minimum() {
            None
        } else {
            Magnitude::from_index(magnitude.index() - 1)
        }
    }

    /// Iterates over the landmarks of this domain in ascending order.
    pub fn magnitudes(self) -> impl Iterator<Item = Magnitude> {
        (0..=self.maximum().index()).filter_map(Magnitude::from_index)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPositive => write!(f, "{{zero, positive}}"),
            Self::ZeroPositiveMax => write!(f, "{{zero, positive, max}}"),
        }
    }
}

/// The qualitative sign of a quantity's rate of change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DerivativeSign {
    /// Decreasing.
    Negative,
    /// Steady.
    Steady,
    /// Increasing.
    Positive,
}

impl DerivativeSign {
    /// All signs, in ascending order. This is the candidate set for an
    /// ambiguous propagation outcome.
    pub const ALL: [Self; 3] = [Self::Negative, Self::Steady, Self::Positive];

    /// Returns the sign as a signed integer in `{-1, 0, 1}`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Steady => 0,
            Self::Positive => 1,
        }
    }

    /// Returns the sign for a signed integer, if it is in `{-1, 0, 1}`.
    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Negative),
            0 => Some(Self::Steady),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Steps one unit toward `Positive`, saturating at `Positive`.
    #[must_use]
    pub const fn step_up(self) -> Self {
        match self {
            Self::Negative => Self::Steady,
            Self::Steady | Self::Positive => Self::Positive,
        }
    }

    /// Steps one unit toward `Negative`, saturating at `Negative`.
    #[must_use]
    pub const fn step_down(self) -> Self {
        match self {
            Self::Positive => Self::Steady,
            Self::Steady | Self::Negative => Self::Negative,
        }
    }

    /// Returns every sign within one step of this one, in ascending order.
    ///
    /// This is the candidate set for an exogenous quantity whose derivative
    /// is not explained by relations.
    #[must_use]
    pub fn neighbors(self) -> Vec<Self> {
        match self {
            Self::Negative => vec![Self::Negative, Self::Steady],
            Self::Steady => vec![Self::Negative, Self::Steady, Self::Positive],
            Self::Positive => vec![Self::Steady, Self::Positive],
        }
    }
}

impl fmt::Display for DerivativeSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "-"),
            Self::Steady => write!(f, "0"),
            Self::Positive => write!(f, "+"),
        }
    }
}
