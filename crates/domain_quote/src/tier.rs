//! Coverage tier mapping
//!
//! A tier is a categorical label for an inpatient-coverage band, fixed in
//! KES. Bands are lower-inclusive and upper-exclusive, with the top tier
//! open-ended. An unknown tier key maps to nothing; the caller treats the
//! request as coverage-unconstrained rather than failing.

use core_kernel::{AmountBand, InsuranceType};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical coverage tiers, ordered from least to most cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageTier {
    Basic,
    Standard,
    Enhanced,
    Premium,
    Executive,
    Elite,
}

impl CoverageTier {
    /// Parses the form's tier key; unknown keys resolve to None
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(CoverageTier::Basic),
            "standard" => Some(CoverageTier::Standard),
            "enhanced" => Some(CoverageTier::Enhanced),
            "premium" => Some(CoverageTier::Premium),
            "executive" => Some(CoverageTier::Executive),
            "elite" => Some(CoverageTier::Elite),
            _ => None,
        }
    }

    /// Returns the form key for this tier
    pub fn key(&self) -> &'static str {
        match self {
            CoverageTier::Basic => "basic",
            CoverageTier::Standard => "standard",
            CoverageTier::Enhanced => "enhanced",
            CoverageTier::Premium => "premium",
            CoverageTier::Executive => "executive",
            CoverageTier::Elite => "elite",
        }
    }

    /// The inpatient-coverage band this tier selects, in KES
    pub fn band(&self) -> AmountBand {
        match self {
            CoverageTier::Basic => AmountBand::bounded(dec!(0), dec!(300000)),
            CoverageTier::Standard => AmountBand::bounded(dec!(300000), dec!(1000000)),
            CoverageTier::Enhanced => AmountBand::bounded(dec!(1000000), dec!(2000000)),
            CoverageTier::Premium => AmountBand::bounded(dec!(2000000), dec!(3000000)),
            CoverageTier::Executive => AmountBand::bounded(dec!(3000000), dec!(5000000)),
            CoverageTier::Elite => AmountBand::open_ended(dec!(5000000)),
        }
    }
}

impl fmt::Display for CoverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// True for insurance types whose plans are banded by inpatient limit
///
/// Accident and travel products have no inpatient limit to band on, so tier
/// selections there never activate tier filtering.
pub fn tier_eligible(insurance_type: InsuranceType) -> bool {
    matches!(
        insurance_type,
        InsuranceType::Health | InsuranceType::Seniors
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_band() {
        let band = CoverageTier::Basic.band();
        assert_eq!(band.lower(), dec!(0));
        assert_eq!(band.upper(), Some(dec!(300000)));
    }

    #[test]
    fn test_elite_band_is_open_ended() {
        let band = CoverageTier::Elite.band();
        assert_eq!(band.lower(), dec!(5000000));
        assert_eq!(band.upper(), None);
    }

    #[test]
    fn test_bands_tile_without_gaps() {
        let tiers = [
            CoverageTier::Basic,
            CoverageTier::Standard,
            CoverageTier::Enhanced,
            CoverageTier::Premium,
            CoverageTier::Executive,
            CoverageTier::Elite,
        ];
        for pair in tiers.windows(2) {
            assert_eq!(pair[0].band().upper(), Some(pair[1].band().lower()));
        }
    }

    #[test]
    fn test_unknown_key_maps_to_none() {
        assert_eq!(CoverageTier::from_key("platinum"), None);
        assert_eq!(CoverageTier::from_key(""), None);
    }

    #[test]
    fn test_key_roundtrip_case_insensitive() {
        assert_eq!(CoverageTier::from_key("ELITE"), Some(CoverageTier::Elite));
        assert_eq!(
            CoverageTier::from_key(" standard "),
            Some(CoverageTier::Standard)
        );
    }

    #[test]
    fn test_tier_eligibility_by_type() {
        assert!(tier_eligible(InsuranceType::Health));
        assert!(tier_eligible(InsuranceType::Seniors));
        assert!(!tier_eligible(InsuranceType::PersonalAccident));
        assert!(!tier_eligible(InsuranceType::Travel));
    }
}
