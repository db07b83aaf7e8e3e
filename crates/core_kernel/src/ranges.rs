//! Age and amount range types
//!
//! Premium brackets and plan eligibility windows are closed age intervals,
//! usually encoded upstream as labels such as `"60-65"` or `"66-70"`.
//! Coverage tiers are half-open monetary bands, open-ended at the top.
//! Both live here so the catalog, resolver, and matching crates agree on
//! interval semantics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or constructing ranges
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range label: {0:?}")]
    InvalidLabel(String),

    #[error("Range bounds are inverted: {min} > {max}")]
    InvertedBounds { min: u32, max: u32 },
}

/// A closed age interval `[min, max]`, both bounds inclusive
///
/// Used for premium brackets and plan eligibility windows. Parsing accepts
/// the catalog's label form (`"60-65"`, with optional surrounding spaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeSpan {
    min: u32,
    max: u32,
}

impl AgeSpan {
    /// Creates a span, rejecting inverted bounds
    pub fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound, inclusive
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound, inclusive
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns true if `age` falls inside the span
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }

    /// Returns true if two closed spans share at least one age
    pub fn overlaps(&self, other: &AgeSpan) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Overlap test against a possibly unbounded interval
    ///
    /// A missing bound is treated as unconstrained on that side, so a fully
    /// unspecified interval overlaps every span.
    pub fn overlaps_open(&self, min: Option<u32>, max: Option<u32>) -> bool {
        let lower_ok = match max {
            Some(m) => self.min <= m,
            None => true,
        };
        let upper_ok = match min {
            Some(m) => self.max >= m,
            None => true,
        };
        lower_ok && upper_ok
    }
}

impl fmt::Display for AgeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for AgeSpan {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s
            .split_once('-')
            .ok_or_else(|| RangeError::InvalidLabel(s.to_string()))?;
        let min: u32 = lo
            .trim()
            .parse()
            .map_err(|_| RangeError::InvalidLabel(s.to_string()))?;
        let max: u32 = hi
            .trim()
            .parse()
            .map_err(|_| RangeError::InvalidLabel(s.to_string()))?;
        AgeSpan::new(min, max)
    }
}

/// A half-open monetary band `[lower, upper)`, open-ended when `upper` is None
///
/// Coverage tiers map to bands over a plan's inpatient limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBand {
    lower: Decimal,
    upper: Option<Decimal>,
}

impl AmountBand {
    /// Creates a band with both bounds
    pub fn bounded(lower: Decimal, upper: Decimal) -> Self {
        Self {
            lower,
            upper: Some(upper),
        }
    }

    /// Creates a band with no upper bound
    pub fn open_ended(lower: Decimal) -> Self {
        Self { lower, upper: None }
    }

    /// Lower bound, inclusive
    pub fn lower(&self) -> Decimal {
        self.lower
    }

    /// Upper bound, exclusive; None means unbounded
    pub fn upper(&self) -> Option<Decimal> {
        self.upper
    }

    /// Returns true if `amount` falls inside `[lower, upper)`
    pub fn contains(&self, amount: Decimal) -> bool {
        if amount < self.lower {
            return false;
        }
        match self.upper {
            Some(upper) => amount < upper,
            None => true,
        }
    }
}

impl fmt::Display for AmountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "[{}, {})", self.lower, upper),
            None => write!(f, "[{}, ∞)", self.lower),
        }
    }
}
