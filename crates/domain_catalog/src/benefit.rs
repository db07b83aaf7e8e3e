//! Per-plan benefits and exclusions

use core_kernel::{BenefitId, ExclusionId, Money, PlanId};
use serde::{Deserialize, Serialize};

/// Something a plan covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: BenefitId,
    pub plan_id: PlanId,
    pub description: String,
    /// Grouping used by the comparison view (e.g. "maternity", "dental")
    pub category: Option<String>,
    /// Sub-limit for this benefit, when one applies
    pub limit: Option<Money>,
}

impl Benefit {
    pub fn new(plan_id: PlanId, description: impl Into<String>) -> Self {
        Self {
            id: BenefitId::new_v7(),
            plan_id,
            description: description.into(),
            category: None,
            limit: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_limit(mut self, limit: Money) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Something a plan explicitly does not cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub id: ExclusionId,
    pub plan_id: PlanId,
    pub description: String,
    pub category: Option<String>,
}

impl Exclusion {
    pub fn new(plan_id: PlanId, description: impl Into<String>) -> Self {
        Self {
            id: ExclusionId::new_v7(),
            plan_id,
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
