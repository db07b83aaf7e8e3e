//! Canonical quote request
//!
//! A `QuoteRequest` is the resolved, immutable description of what the user
//! wants covered. It is built once per submission by the normalizer and read
//! by the matching engine and the submission packager.

use core_kernel::InsuranceType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tier::CoverageTier;

/// Fields that only apply to particular insurance types
///
/// These are copied verbatim from the form; the resolvers do not interpret
/// them. Unset fields stay `None` rather than empty-string placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSpecificFields {
    /// Personal accident: nature of cover sought
    pub accident_type: Option<String>,
    /// Personal accident: requested cover amount
    pub coverage_amount: Option<Decimal>,
    /// Travel: single trip, multi-trip, student
    pub trip_type: Option<String>,
    /// Travel: destination region
    pub destination: Option<String>,
    /// Travel: trip duration selection
    pub trip_duration: Option<String>,
    /// Travel: number of travellers
    pub traveller_count: Option<u32>,
    /// Travel: requested medical cover amount
    pub medical_coverage_amount: Option<Decimal>,
    /// Free-form additional benefit selections
    pub additional_benefits: Vec<String>,
    /// Travel: trip cancellation cover requested
    pub trip_cancellation: bool,
    /// Travel: baggage cover requested
    pub baggage_cover: bool,
}

/// Canonical, resolved description of a user's desired insurance coverage
///
/// Invariants upheld by the normalizer:
/// - `age_min <= age_max` whenever both are set
/// - `budget_min <= budget_max` whenever both are set (after clamping)
/// - unresolved facts are `None`; no sentinel values reach arithmetic
/// - `tier_filter_active` implies `coverage_tier` is set and the insurance
///   type is tier-eligible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Product line being compared; defaults to health when unspecified
    pub insurance_type: InsuranceType,
    /// Exact age, when a single age could be derived
    pub age_exact: Option<u32>,
    /// Lower age bound
    pub age_min: Option<u32>,
    /// Upper age bound
    pub age_max: Option<u32>,
    /// Lower annual budget bound (KES)
    pub budget_min: Option<Decimal>,
    /// Upper annual budget bound (KES)
    pub budget_max: Option<Decimal>,
    /// Selected coverage tier, if any
    pub coverage_tier: Option<CoverageTier>,
    /// True when the tier, not the numeric budget, drives filtering
    pub tier_filter_active: bool,
    /// Fields specific to the selected insurance type
    pub type_specific: TypeSpecificFields,
    /// Contact name captured on the form, if already provided
    pub customer_name: Option<String>,
    /// Contact phone captured on the form, if already provided
    pub customer_phone: Option<String>,
}

impl QuoteRequest {
    /// The single age the premium lookup keys on: the exact age when known,
    /// otherwise the lower bound of the resolved range
    pub fn representative_age(&self) -> Option<u32> {
        self.age_exact.or(self.age_min)
    }

    /// True when no age constraint could be resolved
    pub fn age_unconstrained(&self) -> bool {
        self.age_min.is_none() && self.age_max.is_none()
    }

    /// True when no budget constraint applies (tier mode suspends the
    /// numeric budget entirely)
    pub fn budget_unconstrained(&self) -> bool {
        self.tier_filter_active || (self.budget_min.is_none() && self.budget_max.is_none())
    }
}
