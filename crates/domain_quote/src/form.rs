//! Raw comparison form state
//!
//! The form accumulates answers across several steps, and the same fact can
//! be present in more than one representation at once (an age string from
//! one step and numeric bounds carried over from another). This struct is a
//! faithful capture of that state; the resolvers decide which representation
//! wins.

use chrono::NaiveDate;
use core_kernel::InsuranceType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::{QuoteRequest, TypeSpecificFields};

/// Partially-filled, multi-representation form state
///
/// Every field is optional; `Default` produces a completely empty form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuoteForm {
    /// Selected product line, if the user got that far
    pub insurance_type: Option<InsuranceType>,
    /// Birthdate, the most authoritative age source
    pub date_of_birth: Option<NaiveDate>,
    /// Free-form age answer: `"34"`, `"30-40"`, or `"65+"`
    pub age: Option<String>,
    /// Age as a plain number, from steps that collect it numerically
    pub age_years: Option<u32>,
    /// Pre-resolved lower age bound carried from an earlier step
    pub age_min: Option<u32>,
    /// Pre-resolved upper age bound carried from an earlier step
    pub age_max: Option<u32>,
    /// Budget from the slider control (a single ceiling value)
    pub budget_value: Option<Decimal>,
    /// Free-form budget answer: `"5000-10000"` or `"15000+"`
    pub budget: Option<String>,
    /// Pre-resolved lower budget bound
    pub budget_min: Option<Decimal>,
    /// Pre-resolved upper budget bound
    pub budget_max: Option<Decimal>,
    /// Raw coverage tier key: `"basic"` through `"elite"`
    pub coverage_tier: Option<String>,
    /// True when the user chose to filter by tier rather than budget
    pub tier_filter_active: bool,
    /// Type-specific answers, copied through untouched
    pub type_specific: TypeSpecificFields,
    /// Contact name, if the contact step was reached
    pub customer_name: Option<String>,
    /// Contact phone, if the contact step was reached
    pub customer_phone: Option<String>,
}

/// Re-encodes a canonical request as form state
///
/// Supports the edit-and-resubmit flow; normalizing the result yields the
/// original request back (resolution is idempotent on canonical input).
impl From<&QuoteRequest> for RawQuoteForm {
    fn from(request: &QuoteRequest) -> Self {
        RawQuoteForm {
            insurance_type: Some(request.insurance_type),
            date_of_birth: None,
            age: None,
            age_years: request.age_exact,
            age_min: request.age_min,
            age_max: request.age_max,
            budget_value: None,
            budget: None,
            budget_min: request.budget_min,
            budget_max: request.budget_max,
            coverage_tier: request.coverage_tier.map(|t| t.key().to_string()),
            tier_filter_active: request.tier_filter_active,
            type_specific: request.type_specific.clone(),
            customer_name: request.customer_name.clone(),
            customer_phone: request.customer_phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_empty() {
        let form = RawQuoteForm::default();
        assert!(form.insurance_type.is_none());
        assert!(form.age.is_none());
        assert!(!form.tier_filter_active);
        assert_eq!(form.type_specific, TypeSpecificFields::default());
    }

    #[test]
    fn test_form_deserializes_sparse_json() {
        let form: RawQuoteForm = serde_json::from_str(
            r#"{"insurance_type": "seniors", "age": "65+", "budget": "15000+"}"#,
        )
        .unwrap();
        assert_eq!(form.insurance_type, Some(InsuranceType::Seniors));
        assert_eq!(form.age.as_deref(), Some("65+"));
    }
}
