//! Age-bracketed premium entries
//!
//! Premiums are keyed by closed age brackets that arrive from the data
//! source as labels such as `"60-65"`. The label is parsed once, at catalog
//! build time; a malformed label is a load-time error, never a request-time
//! surprise.

use core_kernel::{AgeSpan, Money, PlanId, PremiumEntryId};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// An annual premium for one age bracket of one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumEntry {
    pub id: PremiumEntryId,
    pub plan_id: PlanId,
    /// Closed age interval parsed from the bracket label
    pub bracket: AgeSpan,
    /// The original label, kept for display
    pub bracket_label: String,
    pub annual_premium: Money,
}

impl PremiumEntry {
    /// Parses the bracket label and builds the entry
    pub fn from_label(
        plan_id: PlanId,
        label: &str,
        annual_premium: Money,
    ) -> Result<Self, CatalogError> {
        let bracket: AgeSpan = label.parse().map_err(|source| CatalogError::InvalidBracket {
            label: label.to_string(),
            source,
        })?;
        Ok(Self {
            id: PremiumEntryId::new_v7(),
            plan_id,
            bracket,
            bracket_label: label.trim().to_string(),
            annual_premium,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_label() {
        let entry =
            PremiumEntry::from_label(PlanId::new(), "60-65", Money::kes(dec!(58000))).unwrap();
        assert!(entry.bracket.contains(60));
        assert!(entry.bracket.contains(65));
        assert_eq!(entry.bracket_label, "60-65");
    }

    #[test]
    fn test_malformed_label_is_rejected() {
        let err = PremiumEntry::from_label(PlanId::new(), "60 plus", Money::kes(dec!(1000)))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBracket { .. }));
    }
}
