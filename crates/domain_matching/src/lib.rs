//! Plan Matching Domain
//!
//! Evaluates a canonical `QuoteRequest` against the plan catalog: which plans
//! is the user eligible for, at what annual premium, and do they fit the
//! stated budget or coverage tier.
//!
//! # Fail-open policy
//!
//! The engine never throws and never filters on missing data. A plan is only
//! excluded when a *resolved* constraint is strictly violated; an
//! unresolvable request degrades to the full catalog annotated with per-plan
//! reasons, so the user is never shown zero results purely because they
//! skipped a form step.

pub mod engine;
pub mod plan_match;

pub use engine::match_plans;
pub use plan_match::{MatchGroup, PlanMatch};
