//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Money, PlanId};
use domain_matching::PlanMatch;

/// Asserts that a match list contains a plan and returns a reference to it
///
/// # Panics
///
/// Panics with the list of present plan names when the plan is absent.
pub fn assert_contains_plan(matches: &[PlanMatch], plan_id: PlanId) -> &PlanMatch {
    matches.iter().find(|m| m.plan_id == plan_id).unwrap_or_else(|| {
        let names: Vec<&str> = matches.iter().map(|m| m.plan_name.as_str()).collect();
        panic!("plan {plan_id} not in match results; present: {names:?}")
    })
}

/// Asserts that one plan is ranked strictly before another
pub fn assert_ranked_before(matches: &[PlanMatch], first: PlanId, second: PlanId) {
    let pos = |id: PlanId| {
        matches
            .iter()
            .position(|m| m.plan_id == id)
            .unwrap_or_else(|| panic!("plan {id} not in match results"))
    };
    let (a, b) = (pos(first), pos(second));
    assert!(
        a < b,
        "expected {} (index {a}) before {} (index {b})",
        matches[a].plan_name,
        matches[b].plan_name
    );
}

/// Asserts that a match is fully qualified: eligible, within budget, and
/// within tier.
pub fn assert_qualified(m: &PlanMatch) {
    assert!(
        m.qualified(),
        "expected {} to qualify (eligible={}, within_budget={}, within_tier={}, notes={:?})",
        m.plan_name,
        m.eligible,
        m.within_budget,
        m.within_tier,
        m.notes
    );
}

/// Asserts that a match carries an exact, bracket-resolved premium
pub fn assert_resolved_premium(m: &PlanMatch, expected: Money) {
    assert!(
        m.premium_resolved,
        "expected a bracket-resolved premium for {}, notes={:?}",
        m.plan_name, m.notes
    );
    assert_eq!(
        m.premium,
        Some(expected),
        "premium mismatch for {}",
        m.plan_name
    );
}
