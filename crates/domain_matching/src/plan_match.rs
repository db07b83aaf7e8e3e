//! Per-plan match results

use core_kernel::{CompanyId, Money, PlanId};
use serde::{Deserialize, Serialize};

/// Ranking group for a match; lower sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchGroup {
    /// Eligible and fits the budget (or tier) constraint
    Qualified,
    /// Eligible but priced or banded outside the stated constraint
    ConstraintExcluded,
    /// Outside the plan's entry age window
    AgeExcluded,
}

/// One plan's evaluation against a request; ephemeral, produced per
/// invocation and discarded after rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMatch {
    pub plan_id: PlanId,
    pub company_id: CompanyId,
    pub plan_name: String,
    pub company_name: String,
    /// Annual premium, when one could be resolved or estimated
    pub premium: Option<Money>,
    /// False means `premium` is an estimate (or absent): the requested age
    /// did not land in a defined bracket
    pub premium_resolved: bool,
    /// True when the plan's entry age window overlaps the requested range
    pub eligible: bool,
    /// False only when a resolved premium strictly violates a stated bound
    pub within_budget: bool,
    /// False only when tier mode is active and the inpatient limit falls
    /// outside the tier band
    pub within_tier: bool,
    /// Human-readable reasons for estimates and exclusions
    pub notes: Vec<String>,
}

impl PlanMatch {
    /// True when the plan should appear in the top-ranked group
    pub fn qualified(&self) -> bool {
        self.eligible && self.within_budget && self.within_tier
    }

    /// Which ranking group this match belongs to
    pub fn group(&self) -> MatchGroup {
        if !self.eligible {
            MatchGroup::AgeExcluded
        } else if self.qualified() {
            MatchGroup::Qualified
        } else {
            MatchGroup::ConstraintExcluded
        }
    }
}
