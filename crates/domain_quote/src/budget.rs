//! Budget resolution
//!
//! Budgets arrive as a slider scalar, a free-form string, or pre-resolved
//! bounds, and a coverage-tier selection can suspend the numeric budget
//! entirely. As with age, resolution is an ordered precedence table over
//! a tagged, total function.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::form::RawQuoteForm;

/// Which precedence rule produced the resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetSource {
    /// Rule 1: tier filter mode is active; numeric budget is suspended
    TierOverride,
    /// Rule 2: slider scalar used as a ceiling
    ScalarCeiling,
    /// Rule 3: parsed from a `"min-max"` string
    RangeString,
    /// Rule 4: parsed from an `"n+"` string
    OpenEndedString,
    /// Rule 5: a plain numeric string used as a ceiling
    PlainValue,
    /// Rule 6: numeric bounds already supplied
    PassThrough,
    /// Rule 7: no usable representation; budget is unconstrained
    Unspecified,
}

/// Resolved budget bounds, tagged with the rule that produced them
///
/// `min <= max` holds whenever both are set; inverted input is clamped by
/// keeping the larger value as the ceiling, never silently swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResolution {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub source: BudgetSource,
}

impl BudgetResolution {
    fn unspecified(source: BudgetSource) -> Self {
        Self {
            min: None,
            max: None,
            source,
        }
    }

    fn ceiling(max: Decimal, source: BudgetSource) -> Self {
        Self {
            min: None,
            max: Some(max),
            source,
        }
    }
}

/// Resolves the effective budget bounds from the raw form
///
/// `tier_filter_active` is the normalizer's verdict on whether tier mode
/// applies (tier selected, parseable, and the insurance type is
/// tier-eligible). When it does, every numeric budget representation is
/// ignored for filtering and the tier mapper supplies the effective range.
pub fn resolve_budget(form: &RawQuoteForm, tier_filter_active: bool) -> BudgetResolution {
    // Rule 1: tier mode suspends the numeric budget.
    if tier_filter_active {
        return BudgetResolution::unspecified(BudgetSource::TierOverride);
    }

    // Rule 2: a slider value is a ceiling.
    if let Some(value) = form.budget_value {
        return BudgetResolution::ceiling(value, BudgetSource::ScalarCeiling);
    }

    // Rules 3-5: a free-form budget string, when present and non-blank.
    if let Some(raw) = form
        .budget
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return resolve_budget_string(raw);
    }

    // Rule 6: bounds already resolved upstream pass through.
    if form.budget_min.is_some() || form.budget_max.is_some() {
        let (min, max) = clamp_bounds(form.budget_min, form.budget_max);
        return BudgetResolution {
            min,
            max,
            source: BudgetSource::PassThrough,
        };
    }

    // Rule 7: nothing usable; budget is unconstrained.
    BudgetResolution::unspecified(BudgetSource::Unspecified)
}

fn resolve_budget_string(raw: &str) -> BudgetResolution {
    if let Some((lo, hi)) = raw.split_once('-') {
        let min = parse_amount(lo);
        let max = parse_amount(hi);
        if min.is_none() || max.is_none() {
            debug!(input = raw, "malformed budget range; resolving as unspecified");
            return BudgetResolution::unspecified(BudgetSource::RangeString);
        }
        let (min, max) = clamp_bounds(min, max);
        return BudgetResolution {
            min,
            max,
            source: BudgetSource::RangeString,
        };
    }

    if let Some(base) = raw.strip_suffix('+') {
        return match parse_amount(base) {
            Some(min) => BudgetResolution {
                min: Some(min),
                max: None,
                source: BudgetSource::OpenEndedString,
            },
            None => {
                debug!(input = raw, "malformed open-ended budget; resolving as unspecified");
                BudgetResolution::unspecified(BudgetSource::OpenEndedString)
            }
        };
    }

    match parse_amount(raw) {
        Some(value) => BudgetResolution::ceiling(value, BudgetSource::PlainValue),
        None => {
            debug!(input = raw, "malformed budget value; resolving as unspecified");
            BudgetResolution::unspecified(BudgetSource::PlainValue)
        }
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

/// Clamps inverted bounds by keeping the larger value as the ceiling
///
/// `"10000-5000"` resolves to `[10000, 10000]`, observably different from a
/// silent swap, and never an error.
fn clamp_bounds(min: Option<Decimal>, max: Option<Decimal>) -> (Option<Decimal>, Option<Decimal>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => {
            debug!(%lo, %hi, "inverted budget bounds; clamping max up to min");
            (Some(lo), Some(lo))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn form_with_budget(budget: &str) -> RawQuoteForm {
        RawQuoteForm {
            budget: Some(budget.to_string()),
            ..RawQuoteForm::default()
        }
    }

    #[test]
    fn test_tier_override_suspends_numeric_budget() {
        let form = RawQuoteForm {
            budget_value: Some(dec!(60000)),
            budget: Some("5000-10000".to_string()),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_budget(&form, true);
        assert_eq!(resolved.source, BudgetSource::TierOverride);
        assert_eq!(resolved.min, None);
        assert_eq!(resolved.max, None);
    }

    #[test]
    fn test_scalar_is_a_ceiling() {
        let form = RawQuoteForm {
            budget_value: Some(dec!(60000)),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_budget(&form, false);
        assert_eq!(resolved.source, BudgetSource::ScalarCeiling);
        assert_eq!(resolved.min, None);
        assert_eq!(resolved.max, Some(dec!(60000)));
    }

    #[test]
    fn test_range_string() {
        let resolved = resolve_budget(&form_with_budget("5000-10000"), false);
        assert_eq!(resolved.source, BudgetSource::RangeString);
        assert_eq!(resolved.min, Some(dec!(5000)));
        assert_eq!(resolved.max, Some(dec!(10000)));
    }

    #[test]
    fn test_open_ended_string() {
        let resolved = resolve_budget(&form_with_budget("15000+"), false);
        assert_eq!(resolved.source, BudgetSource::OpenEndedString);
        assert_eq!(resolved.min, Some(dec!(15000)));
        assert_eq!(resolved.max, None);
    }

    #[test]
    fn test_plain_string_is_a_ceiling() {
        let resolved = resolve_budget(&form_with_budget("25000"), false);
        assert_eq!(resolved.source, BudgetSource::PlainValue);
        assert_eq!(resolved.min, None);
        assert_eq!(resolved.max, Some(dec!(25000)));
    }

    #[test]
    fn test_pass_through() {
        let form = RawQuoteForm {
            budget_min: Some(dec!(20000)),
            budget_max: Some(dec!(80000)),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_budget(&form, false);
        assert_eq!(resolved.source, BudgetSource::PassThrough);
        assert_eq!(resolved.min, Some(dec!(20000)));
        assert_eq!(resolved.max, Some(dec!(80000)));
    }

    #[test]
    fn test_nothing_resolves_to_unspecified() {
        let resolved = resolve_budget(&RawQuoteForm::default(), false);
        assert_eq!(resolved.source, BudgetSource::Unspecified);
        assert_eq!(resolved.min, None);
        assert_eq!(resolved.max, None);
    }

    #[test]
    fn test_inverted_bounds_clamp_to_larger_ceiling() {
        let resolved = resolve_budget(&form_with_budget("10000-5000"), false);
        assert_eq!(resolved.min, Some(dec!(10000)));
        assert_eq!(resolved.max, Some(dec!(10000)));
    }

    #[test]
    fn test_malformed_strings_resolve_to_unspecified() {
        for input in ["cheap", "5000-lots", "plus+"] {
            let resolved = resolve_budget(&form_with_budget(input), false);
            assert_eq!(resolved.min, None, "input {input:?}");
            assert_eq!(resolved.max, None, "input {input:?}");
        }
    }

    #[test]
    fn test_scalar_outranks_string() {
        let form = RawQuoteForm {
            budget_value: Some(dec!(30000)),
            budget: Some("5000-10000".to_string()),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_budget(&form, false);
        assert_eq!(resolved.source, BudgetSource::ScalarCeiling);
        assert_eq!(resolved.max, Some(dec!(30000)));
    }
}
