//! Age resolution
//!
//! The form can carry an age as a birthdate, a free-form string, a plain
//! number, or pre-resolved bounds, sometimes several at once. Resolution
//! applies a fixed precedence table; the first matching rule wins and its
//! outcome is final, even when the matched representation turns out to be
//! malformed (a malformed match resolves to "unspecified", it does not fall
//! through to a lower-precedence source).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::RawQuoteForm;

/// Sentinel upper bound for open-ended age ranges ("65+")
pub const OPEN_UPPER_AGE: u32 = 120;

/// Which precedence rule produced the resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeSource {
    /// Rule 1: computed from the birthdate
    DateOfBirth,
    /// Rule 2: parsed from a `"min-max"` string
    RangeString,
    /// Rule 3: parsed from an `"n+"` string
    OpenEndedString,
    /// Rule 4: a plain numeric value or string
    Scalar,
    /// Rule 5: numeric bounds already supplied
    PassThrough,
    /// Rule 6: no usable representation; age is unconstrained
    Unspecified,
}

/// Resolved age, tagged with the rule that produced it
///
/// `min <= max` holds whenever both are set. All fields `None` means the
/// matching engine must treat age as unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResolution {
    pub exact: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub source: AgeSource,
}

impl AgeResolution {
    fn unspecified(source: AgeSource) -> Self {
        Self {
            exact: None,
            min: None,
            max: None,
            source,
        }
    }

    fn exact(age: u32, source: AgeSource) -> Self {
        Self {
            exact: Some(age),
            min: Some(age),
            max: Some(age),
            source,
        }
    }
}

/// Integer age at `today`, decremented when the birthday has not yet
/// occurred this year
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Resolves the effective age or age range from the raw form
///
/// `today` is injected rather than read from the clock so resolution is a
/// pure function.
pub fn resolve_age(form: &RawQuoteForm, today: NaiveDate) -> AgeResolution {
    // Rule 1: birthdate wins outright.
    if let Some(dob) = form.date_of_birth {
        return AgeResolution::exact(age_on(dob, today), AgeSource::DateOfBirth);
    }

    // Rules 2-4: a free-form age string, when present and non-blank.
    if let Some(raw) = form.age.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        return resolve_age_string(raw);
    }

    // Rule 4 (numeric form): a plain age number.
    if let Some(years) = form.age_years {
        return AgeResolution::exact(years, AgeSource::Scalar);
    }

    // Rule 5: bounds already resolved upstream pass through.
    if form.age_min.is_some() || form.age_max.is_some() {
        let (min, max) = normalize_bounds(form.age_min, form.age_max);
        return AgeResolution {
            exact: None,
            min,
            max,
            source: AgeSource::PassThrough,
        };
    }

    // Rule 6: nothing usable; age is unconstrained.
    AgeResolution::unspecified(AgeSource::Unspecified)
}

fn resolve_age_string(raw: &str) -> AgeResolution {
    if let Some((lo, hi)) = raw.split_once('-') {
        let min = parse_age(lo);
        let max = parse_age(hi);
        if min.is_none() || max.is_none() {
            debug!(input = raw, "malformed age range; resolving as unspecified");
            return AgeResolution::unspecified(AgeSource::RangeString);
        }
        let (min, max) = normalize_bounds(min, max);
        return AgeResolution {
            exact: None,
            min,
            max,
            source: AgeSource::RangeString,
        };
    }

    if let Some(base) = raw.strip_suffix('+') {
        return match parse_age(base) {
            Some(min) => AgeResolution {
                exact: None,
                min: Some(min),
                max: Some(OPEN_UPPER_AGE),
                source: AgeSource::OpenEndedString,
            },
            None => {
                debug!(input = raw, "malformed open-ended age; resolving as unspecified");
                AgeResolution::unspecified(AgeSource::OpenEndedString)
            }
        };
    }

    match parse_age(raw) {
        Some(age) => AgeResolution::exact(age, AgeSource::Scalar),
        None => {
            debug!(input = raw, "malformed age value; resolving as unspecified");
            AgeResolution::unspecified(AgeSource::Scalar)
        }
    }
}

fn parse_age(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

/// Restores `min <= max` on inverted input by raising the upper bound to
/// the larger value, matching the budget resolver's clamping posture
fn normalize_bounds(min: Option<u32>, max: Option<u32>) -> (Option<u32>, Option<u32>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => {
            debug!(min = lo, max = hi, "inverted age bounds; clamping max up to min");
            (Some(lo), Some(lo))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_age(age: &str) -> RawQuoteForm {
        RawQuoteForm {
            age: Some(age.to_string()),
            ..RawQuoteForm::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_birthday_not_yet_reached_this_year() {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(age_on(dob, day_before), 23);
        assert_eq!(age_on(dob, today()), 24);
    }

    #[test]
    fn test_dob_takes_precedence_over_everything() {
        let form = RawQuoteForm {
            date_of_birth: NaiveDate::from_ymd_opt(1960, 1, 1),
            age: Some("30-40".to_string()),
            age_min: Some(20),
            age_max: Some(25),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_age(&form, today());
        assert_eq!(resolved.source, AgeSource::DateOfBirth);
        assert_eq!(resolved.exact, Some(64));
        assert_eq!(resolved.min, Some(64));
        assert_eq!(resolved.max, Some(64));
    }

    #[test]
    fn test_range_string() {
        let resolved = resolve_age(&form_with_age("30-40"), today());
        assert_eq!(resolved.source, AgeSource::RangeString);
        assert_eq!(resolved.exact, None);
        assert_eq!(resolved.min, Some(30));
        assert_eq!(resolved.max, Some(40));
    }

    #[test]
    fn test_open_ended_string_uses_sentinel() {
        let resolved = resolve_age(&form_with_age("65+"), today());
        assert_eq!(resolved.source, AgeSource::OpenEndedString);
        assert_eq!(resolved.min, Some(65));
        assert_eq!(resolved.max, Some(OPEN_UPPER_AGE));
    }

    #[test]
    fn test_plain_string_and_plain_number() {
        let resolved = resolve_age(&form_with_age(" 34 "), today());
        assert_eq!(resolved.source, AgeSource::Scalar);
        assert_eq!(resolved.exact, Some(34));

        let form = RawQuoteForm {
            age_years: Some(34),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_age(&form, today());
        assert_eq!(resolved.source, AgeSource::Scalar);
        assert_eq!(resolved.exact, Some(34));
    }

    #[test]
    fn test_pass_through_bounds() {
        let form = RawQuoteForm {
            age_min: Some(25),
            age_max: Some(35),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_age(&form, today());
        assert_eq!(resolved.source, AgeSource::PassThrough);
        assert_eq!(resolved.exact, None);
        assert_eq!(resolved.min, Some(25));
        assert_eq!(resolved.max, Some(35));
    }

    #[test]
    fn test_nothing_resolves_to_unspecified() {
        let resolved = resolve_age(&RawQuoteForm::default(), today());
        assert_eq!(resolved.source, AgeSource::Unspecified);
        assert_eq!(resolved.exact, None);
        assert_eq!(resolved.min, None);
        assert_eq!(resolved.max, None);
    }

    #[test]
    fn test_malformed_strings_never_produce_values() {
        for input in ["abc", "30-abc", "abc-40", "+", "12.5"] {
            let resolved = resolve_age(&form_with_age(input), today());
            assert_eq!(resolved.exact, None, "input {input:?}");
            assert_eq!(resolved.min, None, "input {input:?}");
            assert_eq!(resolved.max, None, "input {input:?}");
        }
    }

    #[test]
    fn test_malformed_string_does_not_fall_through() {
        // A matched-but-malformed range must not let the pass-through bounds win.
        let form = RawQuoteForm {
            age: Some("30-abc".to_string()),
            age_min: Some(50),
            age_max: Some(60),
            ..RawQuoteForm::default()
        };
        let resolved = resolve_age(&form, today());
        assert_eq!(resolved.source, AgeSource::RangeString);
        assert_eq!(resolved.min, None);
    }

    #[test]
    fn test_inverted_range_clamps_not_swaps() {
        let resolved = resolve_age(&form_with_age("40-30"), today());
        assert_eq!(resolved.min, Some(40));
        assert_eq!(resolved.max, Some(40));
    }

    #[test]
    fn test_leap_day_birthdate() {
        let dob = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let before = NaiveDate::from_ymd_opt(2023, 2, 28).unwrap();
        let after = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(age_on(dob, before), 22);
        assert_eq!(age_on(dob, after), 23);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resolution_always_satisfies_min_le_max(s in "\\PC{0,12}") {
            let form = RawQuoteForm {
                age: Some(s),
                ..RawQuoteForm::default()
            };
            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let resolved = resolve_age(&form, today);
            if let (Some(min), Some(max)) = (resolved.min, resolved.max) {
                prop_assert!(min <= max);
            }
        }

        #[test]
        fn exact_implies_degenerate_range(age in 0u32..120) {
            let form = RawQuoteForm {
                age_years: Some(age),
                ..RawQuoteForm::default()
            };
            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let resolved = resolve_age(&form, today);
            prop_assert_eq!(resolved.exact, Some(age));
            prop_assert_eq!(resolved.min, resolved.max);
        }
    }
}
