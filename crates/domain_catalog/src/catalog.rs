//! The indexed, immutable plan catalog

use std::collections::HashMap;

use core_kernel::{CompanyId, InsuranceType, Money, PlanId};

use crate::benefit::{Benefit, Exclusion};
use crate::company::InsuranceCompany;
use crate::error::CatalogError;
use crate::plan::InsurancePlan;
use crate::premium::PremiumEntry;

/// Read-only reference data for the matching engine
///
/// Built once via [`CatalogBuilder`]; every foreign key and bracket label is
/// validated during the build, so lookups here are total. Plans retain their
/// insertion order, which keeps match output deterministic before sorting.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    companies: HashMap<CompanyId, InsuranceCompany>,
    plans: Vec<InsurancePlan>,
    plan_index: HashMap<PlanId, usize>,
    /// Premium entries per plan, sorted ascending by bracket lower bound
    premiums_by_plan: HashMap<PlanId, Vec<PremiumEntry>>,
    benefits_by_plan: HashMap<PlanId, Vec<Benefit>>,
    exclusions_by_plan: HashMap<PlanId, Vec<Exclusion>>,
}

impl PlanCatalog {
    /// Starts an empty builder
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Looks up a company by id
    pub fn company(&self, id: CompanyId) -> Option<&InsuranceCompany> {
        self.companies.get(&id)
    }

    /// Looks up a plan by id
    pub fn plan(&self, id: PlanId) -> Option<&InsurancePlan> {
        self.plan_index.get(&id).map(|&i| &self.plans[i])
    }

    /// All plans, in insertion order
    pub fn plans(&self) -> &[InsurancePlan] {
        &self.plans
    }

    /// Plans belonging to one product line, in insertion order
    pub fn plans_for(&self, insurance_type: InsuranceType) -> impl Iterator<Item = &InsurancePlan> {
        self.plans
            .iter()
            .filter(move |p| p.plan_type == insurance_type)
    }

    /// Premium entries for a plan, sorted ascending by bracket lower bound;
    /// empty when the plan has no pricing data
    pub fn premiums(&self, plan_id: PlanId) -> &[PremiumEntry] {
        self.premiums_by_plan
            .get(&plan_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Benefits for a plan
    pub fn benefits(&self, plan_id: PlanId) -> &[Benefit] {
        self.benefits_by_plan
            .get(&plan_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exclusions for a plan
    pub fn exclusions(&self, plan_id: PlanId) -> &[Exclusion] {
        self.exclusions_by_plan
            .get(&plan_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of plans in the catalog
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// True when the catalog holds no plans
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Accumulates catalog entities, then validates and indexes them
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    companies: Vec<InsuranceCompany>,
    plans: Vec<InsurancePlan>,
    premiums: Vec<PremiumEntry>,
    benefits: Vec<Benefit>,
    exclusions: Vec<Exclusion>,
}

impl CatalogBuilder {
    pub fn add_company(mut self, company: InsuranceCompany) -> Self {
        self.companies.push(company);
        self
    }

    pub fn add_plan(mut self, plan: InsurancePlan) -> Self {
        self.plans.push(plan);
        self
    }

    /// Adds a premium entry, parsing the bracket label
    pub fn add_premium(
        mut self,
        plan_id: PlanId,
        bracket_label: &str,
        annual_premium: Money,
    ) -> Result<Self, CatalogError> {
        self.premiums
            .push(PremiumEntry::from_label(plan_id, bracket_label, annual_premium)?);
        Ok(self)
    }

    pub fn add_benefit(mut self, benefit: Benefit) -> Self {
        self.benefits.push(benefit);
        self
    }

    pub fn add_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    /// Validates foreign keys and bracket coherence, then builds the
    /// immutable catalog
    pub fn build(self) -> Result<PlanCatalog, CatalogError> {
        let companies: HashMap<CompanyId, InsuranceCompany> =
            self.companies.into_iter().map(|c| (c.id, c)).collect();

        let mut plan_index = HashMap::with_capacity(self.plans.len());
        for (i, plan) in self.plans.iter().enumerate() {
            if !companies.contains_key(&plan.company_id) {
                return Err(CatalogError::UnknownCompany {
                    plan: plan.id,
                    company: plan.company_id,
                });
            }
            if plan_index.insert(plan.id, i).is_some() {
                return Err(CatalogError::DuplicatePlan(plan.id));
            }
        }

        let mut premiums_by_plan: HashMap<PlanId, Vec<PremiumEntry>> = HashMap::new();
        for entry in self.premiums {
            if !plan_index.contains_key(&entry.plan_id) {
                return Err(CatalogError::UnknownPlan {
                    entity: "Premium entry",
                    plan: entry.plan_id,
                });
            }
            premiums_by_plan.entry(entry.plan_id).or_default().push(entry);
        }
        for entries in premiums_by_plan.values_mut() {
            entries.sort_by_key(|e| e.bracket.min());
            for pair in entries.windows(2) {
                if pair[0].bracket.overlaps(&pair[1].bracket) {
                    return Err(CatalogError::OverlappingBrackets {
                        plan: pair[0].plan_id,
                        first: pair[0].bracket_label.clone(),
                        second: pair[1].bracket_label.clone(),
                    });
                }
            }
        }

        let mut benefits_by_plan: HashMap<PlanId, Vec<Benefit>> = HashMap::new();
        for benefit in self.benefits {
            if !plan_index.contains_key(&benefit.plan_id) {
                return Err(CatalogError::UnknownPlan {
                    entity: "Benefit",
                    plan: benefit.plan_id,
                });
            }
            benefits_by_plan.entry(benefit.plan_id).or_default().push(benefit);
        }

        let mut exclusions_by_plan: HashMap<PlanId, Vec<Exclusion>> = HashMap::new();
        for exclusion in self.exclusions {
            if !plan_index.contains_key(&exclusion.plan_id) {
                return Err(CatalogError::UnknownPlan {
                    entity: "Exclusion",
                    plan: exclusion.plan_id,
                });
            }
            exclusions_by_plan
                .entry(exclusion.plan_id)
                .or_default()
                .push(exclusion);
        }

        Ok(PlanCatalog {
            companies,
            plans: self.plans,
            plan_index,
            premiums_by_plan,
            benefits_by_plan,
            exclusions_by_plan,
        })
    }
}
