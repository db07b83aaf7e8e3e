//! The matching engine
//!
//! For each plan in the requested product line: test age eligibility,
//! resolve the annual premium from the age-bracketed entries, apply the
//! budget or tier filter, then rank. Total function; missing request data
//! widens the result rather than narrowing it.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use tracing::debug;

use domain_catalog::{InsurancePlan, PlanCatalog, PremiumEntry};
use domain_quote::QuoteRequest;

use crate::plan_match::PlanMatch;

/// Evaluates every plan of the requested insurance type and returns them
/// ranked: cheapest qualified plan first, then constraint-excluded plans,
/// then age-excluded plans
pub fn match_plans(request: &QuoteRequest, catalog: &PlanCatalog) -> Vec<PlanMatch> {
    let mut matches: Vec<PlanMatch> = catalog
        .plans_for(request.insurance_type)
        .map(|plan| evaluate_plan(request, catalog, plan))
        .collect();

    matches.sort_by(compare_matches);

    debug!(
        insurance_type = request.insurance_type.key(),
        total = matches.len(),
        qualified = matches.iter().filter(|m| m.qualified()).count(),
        "matched plans"
    );

    matches
}

fn evaluate_plan(request: &QuoteRequest, catalog: &PlanCatalog, plan: &InsurancePlan) -> PlanMatch {
    let mut notes = Vec::new();

    let eligible = plan
        .eligibility_age
        .overlaps_open(request.age_min, request.age_max);
    if !eligible {
        notes.push(format!(
            "Entry age {} does not cover the requested age",
            plan.eligibility_age
        ));
    }

    let (premium, premium_resolved) = resolve_premium(
        request.representative_age(),
        catalog.premiums(plan.id),
        &mut notes,
    );

    let (within_budget, within_tier) = if request.tier_filter_active {
        (true, tier_fit(request, plan, &mut notes))
    } else {
        (budget_fit(request, premium, premium_resolved, &mut notes), true)
    };

    PlanMatch {
        plan_id: plan.id,
        company_id: plan.company_id,
        plan_name: plan.name.clone(),
        company_name: catalog
            .company(plan.company_id)
            .map(|c| c.name.clone())
            .unwrap_or_default(),
        premium,
        premium_resolved,
        eligible,
        within_budget,
        within_tier,
        notes,
    }
}

/// Premium bracket resolution
///
/// Brackets arrive sorted ascending. An age above the highest bracket clamps
/// down to it (fail-open); an unresolved age estimates from the lowest
/// bracket; a plan with no pricing data resolves to no premium, flagged but
/// never excluded.
fn resolve_premium(
    representative_age: Option<u32>,
    entries: &[PremiumEntry],
    notes: &mut Vec<String>,
) -> (Option<core_kernel::Money>, bool) {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            notes.push("No pricing data available for this plan".to_string());
            return (None, false);
        }
    };

    let age = match representative_age {
        Some(age) => age,
        None => {
            notes.push(format!(
                "Age not specified; premium estimated from bracket {}",
                first.bracket_label
            ));
            return (Some(first.annual_premium), false);
        }
    };

    if let Some(entry) = entries.iter().find(|e| e.bracket.contains(age)) {
        return (Some(entry.annual_premium), true);
    }

    if age > last.bracket.max() {
        // Preserved policy: the oldest defined bracket prices ages beyond
        // it, rather than declaring no match.
        notes.push(format!(
            "Age {} is above the highest bracket; priced at bracket {}",
            age, last.bracket_label
        ));
        return (Some(last.annual_premium), true);
    }

    // Below the lowest bracket or in a gap between brackets: estimate from
    // the nearest bracket above.
    let nearest = entries
        .iter()
        .find(|e| e.bracket.min() > age)
        .unwrap_or(first);
    notes.push(format!(
        "Age {} has no defined bracket; premium estimated from bracket {}",
        age, nearest.bracket_label
    ));
    (Some(nearest.annual_premium), false)
}

/// Budget filtering excludes only on a resolved premium strictly violating
/// a stated bound; estimates and missing premiums always fit
fn budget_fit(
    request: &QuoteRequest,
    premium: Option<core_kernel::Money>,
    premium_resolved: bool,
    notes: &mut Vec<String>,
) -> bool {
    let premium = match premium {
        Some(p) if premium_resolved => p,
        _ => return true,
    };

    if let Some(min) = request.budget_min {
        if premium.amount() < min {
            notes.push(format!("Annual premium {} is below the stated budget", premium));
            return false;
        }
    }
    if let Some(max) = request.budget_max {
        if premium.amount() > max {
            notes.push(format!("Annual premium {} exceeds the stated budget", premium));
            return false;
        }
    }
    true
}

/// Tier filtering bands on the plan's inpatient limit; a plan without one
/// cannot be outside the band, so it is kept and flagged
fn tier_fit(request: &QuoteRequest, plan: &InsurancePlan, notes: &mut Vec<String>) -> bool {
    let tier = match request.coverage_tier {
        Some(tier) => tier,
        None => return true,
    };
    let inpatient = match plan.limits.inpatient {
        Some(limit) => limit,
        None => {
            notes.push("No inpatient limit on record; tier fit not assessed".to_string());
            return true;
        }
    };

    if tier.band().contains(inpatient.amount()) {
        true
    } else {
        notes.push(format!(
            "Inpatient limit {} is outside the {} tier",
            inpatient, tier
        ));
        false
    }
}

/// Ranking: group first (qualified, constraint-excluded, age-excluded), then
/// ascending premium with unpriced plans last, then company name
fn compare_matches(a: &PlanMatch, b: &PlanMatch) -> Ordering {
    a.group()
        .cmp(&b.group())
        .then_with(|| premium_key(a).cmp(&premium_key(b)))
        .then_with(|| a.company_name.cmp(&b.company_name))
}

fn premium_key(m: &PlanMatch) -> (u8, Decimal) {
    match m.premium {
        Some(p) => (0, p.amount()),
        None => (1, Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{AgeSpan, InsuranceType, Money};
    use domain_catalog::{CoverageLimits, InsuranceCompany, InsurancePlan};
    use domain_quote::TypeSpecificFields;
    use rust_decimal_macros::dec;

    pub(super) fn request(age_exact: Option<u32>) -> QuoteRequest {
        QuoteRequest {
            insurance_type: InsuranceType::Seniors,
            age_exact,
            age_min: age_exact,
            age_max: age_exact,
            budget_min: None,
            budget_max: None,
            coverage_tier: None,
            tier_filter_active: false,
            type_specific: TypeSpecificFields::default(),
            customer_name: None,
            customer_phone: None,
        }
    }

    pub(super) fn senior_catalog() -> (PlanCatalog, core_kernel::PlanId) {
        let company = InsuranceCompany::new("Jubilee Health Insurance");
        let plan = InsurancePlan::new(
            company.id,
            "Senior Care",
            InsuranceType::Seniors,
            AgeSpan::new(60, 85).unwrap(),
        );
        let plan_id = plan.id;
        let catalog = PlanCatalog::builder()
            .add_company(company)
            .add_plan(plan)
            .add_premium(plan_id, "60-65", Money::kes(dec!(58000)))
            .unwrap()
            .add_premium(plan_id, "66-70", Money::kes(dec!(72000)))
            .unwrap()
            .add_premium(plan_id, "71-75", Money::kes(dec!(90000)))
            .unwrap()
            .build()
            .unwrap();
        (catalog, plan_id)
    }

    #[test]
    fn test_exact_bracket_hit() {
        let (catalog, _) = senior_catalog();
        let matches = match_plans(&request(Some(64)), &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].premium, Some(Money::kes(dec!(58000))));
        assert!(matches[0].premium_resolved);
        assert!(matches[0].eligible);
    }

    #[test]
    fn test_middle_bracket_hit() {
        let (catalog, _) = senior_catalog();
        let matches = match_plans(&request(Some(68)), &catalog);
        assert_eq!(matches[0].premium, Some(Money::kes(dec!(72000))));
        assert!(matches[0].premium_resolved);
    }

    #[test]
    fn test_age_above_brackets_clamps_to_highest() {
        // 82 is beyond every bracket but inside the 60-85 eligibility window.
        let (catalog, _) = senior_catalog();
        let matches = match_plans(&request(Some(82)), &catalog);
        assert!(matches[0].eligible);
        assert_eq!(matches[0].premium, Some(Money::kes(dec!(90000))));
        assert!(matches[0].premium_resolved);
        assert!(!matches[0].notes.is_empty());
    }

    #[test]
    fn test_unresolved_age_estimates_from_lowest_bracket() {
        let (catalog, _) = senior_catalog();
        let matches = match_plans(&request(None), &catalog);
        assert!(matches[0].eligible);
        assert_eq!(matches[0].premium, Some(Money::kes(dec!(58000))));
        assert!(!matches[0].premium_resolved);
    }

    #[test]
    fn test_age_outside_eligibility_excluded_with_reason() {
        let (catalog, _) = senior_catalog();
        let matches = match_plans(&request(Some(40)), &catalog);
        assert!(!matches[0].eligible);
        assert!(matches[0]
            .notes
            .iter()
            .any(|n| n.contains("Entry age")));
    }

    #[test]
    fn test_budget_excludes_only_resolved_premiums() {
        let (catalog, _) = senior_catalog();

        let mut over = request(Some(64));
        over.budget_max = Some(dec!(50000));
        let matches = match_plans(&over, &catalog);
        assert!(!matches[0].within_budget);

        // Same budget, but unresolved age: the estimate must not exclude.
        let mut estimated = request(None);
        estimated.budget_max = Some(dec!(50000));
        let matches = match_plans(&estimated, &catalog);
        assert!(matches[0].within_budget);
    }

    #[test]
    fn test_budget_min_excludes_too_cheap_plans() {
        let (catalog, _) = senior_catalog();
        let mut req = request(Some(64));
        req.budget_min = Some(dec!(60000));
        let matches = match_plans(&req, &catalog);
        assert!(!matches[0].within_budget);
    }

    #[test]
    fn test_plan_without_pricing_is_retained_and_flagged() {
        let company = InsuranceCompany::new("CIC Insurance");
        let plan = InsurancePlan::new(
            company.id,
            "Family Shield",
            InsuranceType::Health,
            AgeSpan::new(18, 65).unwrap(),
        );
        let catalog = PlanCatalog::builder()
            .add_company(company)
            .add_plan(plan)
            .build()
            .unwrap();

        let mut req = request(Some(30));
        req.insurance_type = InsuranceType::Health;
        req.budget_max = Some(dec!(10000));
        let matches = match_plans(&req, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].premium, None);
        assert!(matches[0].within_budget);
        assert!(matches[0]
            .notes
            .iter()
            .any(|n| n.contains("No pricing data")));
    }

    #[test]
    fn test_empty_request_returns_full_catalog() {
        let (catalog, _) = senior_catalog();
        let req = request(None);
        let matches = match_plans(&req, &catalog);
        assert_eq!(matches.len(), catalog.len());
        assert!(matches.iter().all(|m| m.eligible && m.within_budget));
    }
}

#[cfg(test)]
mod proptests {
    use super::tests::{request, senior_catalog};
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        // Matching never drops a plan, whatever the age and budget say.
        #[test]
        fn every_plan_appears_exactly_once(
            age in proptest::option::of(0u32..110),
            budget in proptest::option::of(1_000i64..1_000_000),
        ) {
            let (catalog, plan_id) = senior_catalog();
            let mut req = request(age);
            req.budget_max = budget.map(Decimal::from);

            let matches = match_plans(&req, &catalog);
            prop_assert_eq!(matches.len(), catalog.len());
            prop_assert_eq!(
                matches.iter().filter(|m| m.plan_id == plan_id).count(),
                1
            );
        }

        // Ranking is grouped: no qualified plan ever sorts below an
        // excluded one.
        #[test]
        fn groups_are_contiguous(age in 0u32..110, budget in 1_000i64..1_000_000) {
            let (catalog, _) = senior_catalog();
            let mut req = request(Some(age));
            req.budget_max = Some(Decimal::from(budget));

            let matches = match_plans(&req, &catalog);
            let groups: Vec<_> = matches.iter().map(|m| m.group()).collect();
            let mut sorted = groups.clone();
            sorted.sort();
            prop_assert_eq!(groups, sorted);
        }
    }
}
