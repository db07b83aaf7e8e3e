//! Catalog domain errors
//!
//! All of these surface at catalog build (load) time. Request-time code
//! only ever sees a fully validated catalog.

use core_kernel::{CompanyId, PlanId, RangeError};
use thiserror::Error;

/// Errors raised while building the plan catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A plan references a company that was never added
    #[error("Plan {plan} references unknown company {company}")]
    UnknownCompany { plan: PlanId, company: CompanyId },

    /// A premium, benefit, or exclusion references a plan that was never added
    #[error("{entity} references unknown plan {plan}")]
    UnknownPlan { entity: &'static str, plan: PlanId },

    /// A plan was added twice
    #[error("Duplicate plan id {0}")]
    DuplicatePlan(PlanId),

    /// A premium bracket label could not be parsed
    #[error("Invalid premium bracket label {label:?}: {source}")]
    InvalidBracket {
        label: String,
        #[source]
        source: RangeError,
    },

    /// Two premium entries for the same plan cover the same age
    #[error("Plan {plan} has overlapping premium brackets {first} and {second}")]
    OverlappingBrackets {
        plan: PlanId,
        first: String,
        second: String,
    },
}
