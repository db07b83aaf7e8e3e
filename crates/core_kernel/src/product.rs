//! Shared product vocabulary
//!
//! The insurance type is referenced by the quote form, the plan catalog, and
//! the matching engine, so it lives in the kernel rather than any one domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The product lines offered for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceType {
    /// Individual and family medical cover
    Health,
    /// Medical cover for older applicants, age-banded more steeply
    Seniors,
    /// Personal accident cover
    PersonalAccident,
    /// Travel cover
    Travel,
}

impl InsuranceType {
    /// Parses the form's type key; unknown keys resolve to None
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "health" => Some(InsuranceType::Health),
            "seniors" => Some(InsuranceType::Seniors),
            "personal-accident" => Some(InsuranceType::PersonalAccident),
            "travel" => Some(InsuranceType::Travel),
            _ => None,
        }
    }

    /// Returns the form key for this type
    pub fn key(&self) -> &'static str {
        match self {
            InsuranceType::Health => "health",
            InsuranceType::Seniors => "seniors",
            InsuranceType::PersonalAccident => "personal-accident",
            InsuranceType::Travel => "travel",
        }
    }

    /// Human-readable label used in lead summaries
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Health => "Health Insurance",
            InsuranceType::Seniors => "Seniors Health Insurance",
            InsuranceType::PersonalAccident => "Personal Accident Insurance",
            InsuranceType::Travel => "Travel Insurance",
        }
    }
}

impl Default for InsuranceType {
    /// An unspecified type defaults to health cover
    fn default() -> Self {
        InsuranceType::Health
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
