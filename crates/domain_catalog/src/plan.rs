//! Insurance plans and their coverage limits

use core_kernel::{AgeSpan, CompanyId, InsuranceType, Money, PlanId};
use serde::{Deserialize, Serialize};

/// Coverage limits a plan advertises
///
/// Not every product line defines every limit; accident and travel plans
/// typically carry none of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageLimits {
    /// Annual inpatient limit - the amount coverage tiers band on
    pub inpatient: Option<Money>,
    /// Annual outpatient limit
    pub outpatient: Option<Money>,
    /// Last-expense (funeral) benefit
    pub last_expense: Option<Money>,
}

/// A single plan offered by a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub id: PlanId,
    pub company_id: CompanyId,
    pub name: String,
    /// Product line this plan belongs to
    pub plan_type: InsuranceType,
    /// Entry age window; applicants outside it are ineligible
    pub eligibility_age: AgeSpan,
    pub limits: CoverageLimits,
}

impl InsurancePlan {
    pub fn new(
        company_id: CompanyId,
        name: impl Into<String>,
        plan_type: InsuranceType,
        eligibility_age: AgeSpan,
    ) -> Self {
        Self {
            id: PlanId::new_v7(),
            company_id,
            name: name.into(),
            plan_type,
            eligibility_age,
            limits: CoverageLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: CoverageLimits) -> Self {
        self.limits = limits;
        self
    }
}
