//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the quote matching pipeline. The
//! catalog fixture mirrors a realistic slice of the Kenyan market so that
//! ranking and eligibility tests read like the scenarios they exercise.

use chrono::NaiveDate;
use core_kernel::{AgeSpan, Currency, InsuranceType, Money, PlanId};
use domain_catalog::{
    Benefit, CoverageLimits, Exclusion, InsuranceCompany, InsurancePlan, PlanCatalog,
};
use domain_quote::RawQuoteForm;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical annual health premium
    pub fn kes_premium() -> Money {
        Money::kes(dec!(45000.00))
    }

    /// A senior-bracket annual premium
    pub fn kes_senior_premium() -> Money {
        Money::kes(dec!(58000.00))
    }

    /// An inpatient limit in the enhanced coverage band
    pub fn kes_enhanced_limit() -> Money {
        Money::kes(dec!(1500000))
    }

    /// A zero amount
    pub fn kes_zero() -> Money {
        Money::zero(Currency::KES)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference "today" used across resolution tests (Jun 1, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// A birthdate that makes the applicant 64 on [`Self::today`]
    pub fn senior_dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1960, 1, 1).unwrap()
    }

    /// A birthdate that makes the applicant 34 on [`Self::today`]
    pub fn adult_dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 3, 15).unwrap()
    }
}

/// Fixture for quote form test data
pub struct FormFixtures;

impl FormFixtures {
    /// A senior health shopper with a birthdate and a budget ceiling
    pub fn senior_health_form() -> RawQuoteForm {
        RawQuoteForm {
            insurance_type: Some(InsuranceType::Health),
            date_of_birth: Some(TemporalFixtures::senior_dob()),
            budget_value: Some(dec!(60000)),
            customer_name: Some("Wanjiku Kamau".to_string()),
            customer_phone: Some("0712345678".to_string()),
            ..RawQuoteForm::default()
        }
    }

    /// A shopper who answered nothing beyond the product line
    pub fn bare_form(insurance_type: InsuranceType) -> RawQuoteForm {
        RawQuoteForm {
            insurance_type: Some(insurance_type),
            ..RawQuoteForm::default()
        }
    }
}

/// Identifiers of the plans in [`CatalogFixtures::kenyan_market`], for
/// asserting on specific rows without string matching.
#[derive(Debug, Clone, Copy)]
pub struct KenyanMarketPlans {
    pub jubilee_senior_care: PlanId,
    pub jubilee_j_care: PlanId,
    pub aar_afya_plus: PlanId,
    pub britam_milele: PlanId,
    pub cic_family_shield: PlanId,
    pub old_mutual_traveller: PlanId,
}

/// Fixture for a small but realistic plan catalog
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Builds a catalog with five insurers across three product lines.
    ///
    /// Health plans carry inpatient limits spanning the basic, standard,
    /// and enhanced coverage bands. The seniors plan prices the `60-65`
    /// bracket at 58,000 so a 64-year-old with a 60,000 budget qualifies.
    pub fn kenyan_market() -> (PlanCatalog, KenyanMarketPlans) {
        let jubilee = InsuranceCompany::new("Jubilee Health Insurance")
            .with_phone("0709901000")
            .with_email("talk2us@jubileekenya.com");
        let aar = InsuranceCompany::new("AAR Insurance").with_phone("0703063000");
        let britam = InsuranceCompany::new("Britam");
        let cic = InsuranceCompany::new("CIC Insurance Group");
        let old_mutual = InsuranceCompany::new("Old Mutual");

        let senior_care = InsurancePlan::new(
            jubilee.id,
            "Jubilee Senior Care",
            InsuranceType::Seniors,
            AgeSpan::new(60, 85).unwrap(),
        )
        .with_limits(CoverageLimits {
            inpatient: Some(Money::kes(dec!(1500000))),
            outpatient: Some(Money::kes(dec!(150000))),
            last_expense: Some(Money::kes(dec!(100000))),
        });

        let j_care = InsurancePlan::new(
            jubilee.id,
            "Jubilee J-Care",
            InsuranceType::Health,
            AgeSpan::new(0, 65).unwrap(),
        )
        .with_limits(CoverageLimits {
            inpatient: Some(Money::kes(dec!(500000))),
            outpatient: Some(Money::kes(dec!(100000))),
            last_expense: None,
        });

        let afya_plus = InsurancePlan::new(
            aar.id,
            "AAR Afya Plus",
            InsuranceType::Health,
            AgeSpan::new(0, 70).unwrap(),
        )
        .with_limits(CoverageLimits {
            inpatient: Some(Money::kes(dec!(1500000))),
            outpatient: Some(Money::kes(dec!(200000))),
            last_expense: None,
        });

        let milele = InsurancePlan::new(
            britam.id,
            "Britam Milele Health",
            InsuranceType::Health,
            AgeSpan::new(18, 75).unwrap(),
        )
        .with_limits(CoverageLimits {
            inpatient: Some(Money::kes(dec!(250000))),
            outpatient: None,
            last_expense: None,
        });

        let family_shield = InsurancePlan::new(
            cic.id,
            "CIC Family Shield",
            InsuranceType::Health,
            AgeSpan::new(0, 65).unwrap(),
        )
        .with_limits(CoverageLimits {
            inpatient: Some(Money::kes(dec!(1000000))),
            outpatient: Some(Money::kes(dec!(120000))),
            last_expense: None,
        });

        let traveller = InsurancePlan::new(
            old_mutual.id,
            "Old Mutual Traveller",
            InsuranceType::Travel,
            AgeSpan::new(0, 80).unwrap(),
        );

        let plans = KenyanMarketPlans {
            jubilee_senior_care: senior_care.id,
            jubilee_j_care: j_care.id,
            aar_afya_plus: afya_plus.id,
            britam_milele: milele.id,
            cic_family_shield: family_shield.id,
            old_mutual_traveller: traveller.id,
        };

        let catalog = PlanCatalog::builder()
            .add_company(jubilee)
            .add_company(aar)
            .add_company(britam)
            .add_company(cic)
            .add_company(old_mutual)
            .add_plan(senior_care)
            .add_plan(j_care)
            .add_plan(afya_plus)
            .add_plan(milele)
            .add_plan(family_shield)
            .add_plan(traveller)
            .add_premium(plans.jubilee_senior_care, "60-65", Money::kes(dec!(58000)))
            .unwrap()
            .add_premium(plans.jubilee_senior_care, "66-70", Money::kes(dec!(72000)))
            .unwrap()
            .add_premium(plans.jubilee_senior_care, "71-75", Money::kes(dec!(90000)))
            .unwrap()
            .add_premium(plans.jubilee_j_care, "0-17", Money::kes(dec!(18000)))
            .unwrap()
            .add_premium(plans.jubilee_j_care, "18-40", Money::kes(dec!(32000)))
            .unwrap()
            .add_premium(plans.jubilee_j_care, "41-65", Money::kes(dec!(48000)))
            .unwrap()
            .add_premium(plans.aar_afya_plus, "0-17", Money::kes(dec!(22000)))
            .unwrap()
            .add_premium(plans.aar_afya_plus, "18-45", Money::kes(dec!(41000)))
            .unwrap()
            .add_premium(plans.aar_afya_plus, "46-70", Money::kes(dec!(65000)))
            .unwrap()
            .add_premium(plans.britam_milele, "18-75", Money::kes(dec!(24000)))
            .unwrap()
            .add_premium(plans.cic_family_shield, "0-17", Money::kes(dec!(20000)))
            .unwrap()
            .add_premium(plans.cic_family_shield, "18-65", Money::kes(dec!(38000)))
            .unwrap()
            .add_premium(plans.old_mutual_traveller, "0-80", Money::kes(dec!(9000)))
            .unwrap()
            .add_benefit(Benefit::new(plans.jubilee_senior_care, "Chronic condition cover")
                .with_category("inpatient"))
            .add_benefit(Benefit::new(plans.jubilee_senior_care, "Annual wellness check")
                .with_category("outpatient"))
            .add_benefit(Benefit::new(plans.aar_afya_plus, "Maternity cover after one year"))
            .add_exclusion(Exclusion::new(
                plans.jubilee_senior_care,
                "Pre-existing conditions in the first year",
            ))
            .build()
            .expect("kenyan market fixture must be coherent");

        (catalog, plans)
    }
}
