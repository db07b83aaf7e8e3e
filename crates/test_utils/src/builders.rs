//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{AgeSpan, CompanyId, InsuranceType, Money};
use domain_catalog::{CoverageLimits, InsurancePlan};
use domain_quote::RawQuoteForm;
use rust_decimal::Decimal;

/// Builder for constructing test quote forms
pub struct TestFormBuilder {
    form: RawQuoteForm,
}

impl Default for TestFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFormBuilder {
    /// Creates a builder for a health quote with nothing else answered
    pub fn new() -> Self {
        Self {
            form: RawQuoteForm {
                insurance_type: Some(InsuranceType::Health),
                ..RawQuoteForm::default()
            },
        }
    }

    pub fn insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.form.insurance_type = Some(insurance_type);
        self
    }

    pub fn date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.form.date_of_birth = Some(dob);
        self
    }

    /// Free-form age answer such as `"34"`, `"30-40"`, or `"65+"`
    pub fn age_text(mut self, age: impl Into<String>) -> Self {
        self.form.age = Some(age.into());
        self
    }

    pub fn age_years(mut self, years: u32) -> Self {
        self.form.age_years = Some(years);
        self
    }

    pub fn age_bounds(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.form.age_min = min;
        self.form.age_max = max;
        self
    }

    /// Budget ceiling from the slider control
    pub fn budget_value(mut self, value: Decimal) -> Self {
        self.form.budget_value = Some(value);
        self
    }

    /// Free-form budget answer such as `"5000-10000"` or `"15000+"`
    pub fn budget_text(mut self, budget: impl Into<String>) -> Self {
        self.form.budget = Some(budget.into());
        self
    }

    pub fn budget_bounds(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.form.budget_min = min;
        self.form.budget_max = max;
        self
    }

    /// Selects a coverage tier and turns tier filtering on
    pub fn tier(mut self, key: impl Into<String>) -> Self {
        self.form.coverage_tier = Some(key.into());
        self.form.tier_filter_active = true;
        self
    }

    pub fn contact(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.form.customer_name = Some(name.into());
        self.form.customer_phone = Some(phone.into());
        self
    }

    pub fn build(self) -> RawQuoteForm {
        self.form
    }
}

/// Builder for constructing test plans
pub struct TestPlanBuilder {
    company_id: CompanyId,
    name: String,
    plan_type: InsuranceType,
    age_min: u32,
    age_max: u32,
    limits: CoverageLimits,
}

impl TestPlanBuilder {
    /// Creates a builder for a broadly-eligible health plan
    pub fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            name: "Test Health Plan".to_string(),
            plan_type: InsuranceType::Health,
            age_min: 0,
            age_max: 75,
            limits: CoverageLimits::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn plan_type(mut self, plan_type: InsuranceType) -> Self {
        self.plan_type = plan_type;
        self
    }

    pub fn eligibility(mut self, min: u32, max: u32) -> Self {
        self.age_min = min;
        self.age_max = max;
        self
    }

    pub fn inpatient_limit(mut self, limit: Money) -> Self {
        self.limits.inpatient = Some(limit);
        self
    }

    pub fn outpatient_limit(mut self, limit: Money) -> Self {
        self.limits.outpatient = Some(limit);
        self
    }

    /// Panics on inverted eligibility bounds; test input is under the
    /// caller's control.
    pub fn build(self) -> InsurancePlan {
        let span = AgeSpan::new(self.age_min, self.age_max)
            .expect("test plan eligibility bounds must be ordered");
        InsurancePlan::new(self.company_id, self.name, self.plan_type, span)
            .with_limits(self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_form_builder_defaults() {
        let form = TestFormBuilder::new().build();
        assert_eq!(form.insurance_type, Some(InsuranceType::Health));
        assert!(form.age.is_none());
        assert!(!form.tier_filter_active);
    }

    #[test]
    fn test_tier_selection_activates_filtering() {
        let form = TestFormBuilder::new().tier("enhanced").build();
        assert_eq!(form.coverage_tier.as_deref(), Some("enhanced"));
        assert!(form.tier_filter_active);
    }

    #[test]
    fn test_plan_builder_limits() {
        let plan = TestPlanBuilder::new(CompanyId::new())
            .name("Afya Bora")
            .eligibility(18, 65)
            .inpatient_limit(Money::kes(dec!(500000)))
            .build();
        assert_eq!(plan.name, "Afya Bora");
        assert!(plan.eligibility_age.contains(40));
        assert!(plan.limits.inpatient.is_some());
    }
}
