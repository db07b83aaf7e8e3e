//! Input normalization
//!
//! Orchestrates the age, budget, and tier resolvers plus insurance-type
//! defaulting to build the canonical `QuoteRequest`. Never fails on missing
//! optional fields; the worst outcome for any fact is "unconstrained".

use chrono::NaiveDate;
use tracing::debug;

use crate::age::resolve_age;
use crate::budget::resolve_budget;
use crate::form::RawQuoteForm;
use crate::request::QuoteRequest;
use crate::tier::{tier_eligible, CoverageTier};

/// Builds a canonical request from raw form state
///
/// `today` anchors birthdate-derived ages; callers pass the current date at
/// the submission boundary. Normalization is pure and idempotent: feeding a
/// canonical request back through (via `RawQuoteForm::from`) yields an
/// identical request.
pub fn normalize(form: &RawQuoteForm, today: NaiveDate) -> QuoteRequest {
    let insurance_type = form.insurance_type.unwrap_or_default();

    let coverage_tier = form
        .coverage_tier
        .as_deref()
        .and_then(CoverageTier::from_key);
    let tier_filter_active =
        form.tier_filter_active && coverage_tier.is_some() && tier_eligible(insurance_type);

    let age = resolve_age(form, today);
    let budget = resolve_budget(form, tier_filter_active);

    debug!(
        insurance_type = %insurance_type.key(),
        age_source = ?age.source,
        budget_source = ?budget.source,
        tier_filter_active,
        "normalized quote request"
    );

    QuoteRequest {
        insurance_type,
        age_exact: age.exact,
        age_min: age.min,
        age_max: age.max,
        budget_min: budget.min,
        budget_max: budget.max,
        coverage_tier,
        tier_filter_active,
        type_specific: form.type_specific.clone(),
        customer_name: trimmed(form.customer_name.as_deref()),
        customer_phone: trimmed(form.customer_phone.as_deref()),
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
