//! Insurance companies

use core_kernel::CompanyId;
use serde::{Deserialize, Serialize};

/// An underwriter whose plans appear in the comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceCompany {
    pub id: CompanyId,
    pub name: String,
    /// Switchboard or sales line
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl InsuranceCompany {
    /// Creates a company with contact details left unset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CompanyId::new_v7(),
            name: name.into(),
            phone: None,
            email: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_construction() {
        let company = InsuranceCompany::new("Jubilee Health Insurance")
            .with_phone("0709901000")
            .with_email("info@jubileekenya.com");
        assert_eq!(company.name, "Jubilee Health Insurance");
        assert_eq!(company.phone.as_deref(), Some("0709901000"));
    }
}
