//! Property-Based Test Generators
//!
//! Provides proptest strategies and fake-data helpers for generating
//! random test data that maintains domain invariants.

use core_kernel::{Currency, InsuranceType, Money};
use domain_quote::CoverageTier;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating insurance types
pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![
        Just(InsuranceType::Health),
        Just(InsuranceType::Seniors),
        Just(InsuranceType::PersonalAccident),
        Just(InsuranceType::Travel),
    ]
}

/// Strategy for generating coverage tier keys
pub fn coverage_tier_strategy() -> impl Strategy<Value = CoverageTier> {
    prop_oneof![
        Just(CoverageTier::Basic),
        Just(CoverageTier::Standard),
        Just(CoverageTier::Enhanced),
        Just(CoverageTier::Premium),
        Just(CoverageTier::Executive),
        Just(CoverageTier::Elite),
    ]
}

/// Strategy for generating plausible applicant ages
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..110
}

/// Strategy for generating annual budget amounts in shillings
pub fn budget_strategy() -> impl Strategy<Value = Decimal> {
    (1_000i64..2_000_000).prop_map(Decimal::from)
}

/// Strategy for generating KES premium amounts
pub fn kes_premium_strategy() -> impl Strategy<Value = Money> {
    (5_000i64..500_000).prop_map(|amount| Money::new(Decimal::from(amount), Currency::KES))
}

/// Strategy for generating valid Kenyan phone numbers in either the
/// international or the local format
pub fn kenyan_phone_strategy() -> impl Strategy<Value = String> {
    (prop::bool::ANY, 100_000_000u64..1_000_000_000).prop_map(|(intl, digits)| {
        if intl {
            format!("+254{digits}")
        } else {
            format!("0{digits}")
        }
    })
}

/// Generates a fake customer name
pub fn fake_customer_name() -> String {
    Name().fake()
}

/// Generates a fake Kenyan mobile number in the local format
pub fn fake_kenyan_phone() -> String {
    let subscriber: u32 = (0..10_000_000).fake();
    format!("07{:02}{:06}", (0..100).fake::<u32>(), subscriber % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_submission::ContactIdentity;

    proptest! {
        #[test]
        fn generated_phones_pass_identity_validation(phone in kenyan_phone_strategy()) {
            let identity = ContactIdentity::new("Test Customer", &phone);
            prop_assert!(identity.is_ok(), "rejected {phone}");
        }
    }

    #[test]
    fn fake_phone_has_local_shape() {
        let phone = fake_kenyan_phone();
        assert_eq!(phone.len(), 10);
        assert!(phone.starts_with("07"));
    }
}
