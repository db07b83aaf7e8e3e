//! Core Kernel - Foundational types for the quote engine
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Money types with precise decimal arithmetic
//! - Age and amount range types used for premium brackets and coverage bands
//! - Strongly-typed identifiers
//! - Shared product vocabulary (insurance types)

pub mod error;
pub mod identifiers;
pub mod money;
pub mod product;
pub mod ranges;

pub use error::CoreError;
pub use identifiers::{BenefitId, CompanyId, ExclusionId, LeadId, PlanId, PremiumEntryId};
pub use money::{Currency, Money, MoneyError};
pub use product::InsuranceType;
pub use ranges::{AgeSpan, AmountBand, RangeError};
