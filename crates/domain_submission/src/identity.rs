//! Contact identity validation
//!
//! The only blocking validation in the core. Phones are Kenyan format:
//! `+254` or a leading `0`, followed by nine digits, checked after stripping
//! all whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{FieldError, SubmissionError};

static KENYAN_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+254|0)[0-9]{9}$").expect("phone pattern is valid"));

/// Validated contact details for a lead
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct ContactIdentity {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(regex(path = *KENYAN_PHONE, message = "Phone must be a valid Kenyan number"))]
    pub phone: String,
}

impl ContactIdentity {
    /// Normalizes and validates contact details
    ///
    /// Trims the name and strips all whitespace from the phone before
    /// matching. Failures are field-keyed so the form can highlight the
    /// offending inputs.
    pub fn new(name: &str, phone: &str) -> Result<Self, SubmissionError> {
        let identity = Self {
            name: name.trim().to_string(),
            phone: phone.split_whitespace().collect(),
        };

        match identity.validate() {
            Ok(()) => Ok(identity),
            Err(errors) => {
                let mut fields: Vec<FieldError> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid {field}"));
                            FieldError::new(field.to_string(), message)
                        })
                    })
                    .collect();
                fields.sort_by(|a, b| a.field.cmp(&b.field));
                Err(SubmissionError::Validation(fields))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_kenyan_numbers() {
        for phone in ["+254712345678", "0712345678", "0112 345 678", " +254 712 345 678 "] {
            let identity = ContactIdentity::new("Wanjiku Kamau", phone);
            assert!(identity.is_ok(), "phone {phone:?} should validate");
        }
    }

    #[test]
    fn test_whitespace_is_stripped_before_matching() {
        let identity = ContactIdentity::new("Wanjiku Kamau", "+254 712 345 678").unwrap();
        assert_eq!(identity.phone, "+254712345678");
    }

    #[test]
    fn test_short_number_fails_on_phone_field() {
        let err = ContactIdentity::new("Wanjiku Kamau", "12345").unwrap_err();
        let fields = err.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "phone");
    }

    #[test]
    fn test_wrong_prefix_fails() {
        for phone in ["712345678", "+255712345678", "2547123456789"] {
            assert!(
                ContactIdentity::new("Wanjiku Kamau", phone).is_err(),
                "phone {phone:?} should fail"
            );
        }
    }

    #[test]
    fn test_empty_name_fails_on_name_field() {
        let err = ContactIdentity::new("   ", "0712345678").unwrap_err();
        assert_eq!(err.field_errors()[0].field, "name");
    }

    #[test]
    fn test_both_invalid_reports_both_fields() {
        let err = ContactIdentity::new("", "nope").unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }
}
