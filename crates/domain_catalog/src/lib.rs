//! Plan Catalog Domain
//!
//! Static reference data for the comparison engine: insurance companies,
//! their plans, age-bracketed annual premiums, and per-plan benefits and
//! exclusions.
//!
//! # Design
//!
//! The catalog is an arena-and-index structure rather than an object graph
//! with back-references: entities are stored flat and looked up by id, with
//! premiums, benefits, and exclusions indexed by `plan_id`. It is built once
//! at process start through `CatalogBuilder`, which checks foreign keys and
//! bracket labels at build time, and is immutable afterwards - safe for
//! unbounded concurrent readers behind an `Arc`.

pub mod benefit;
pub mod catalog;
pub mod company;
pub mod error;
pub mod plan;
pub mod premium;

pub use benefit::{Benefit, Exclusion};
pub use catalog::{CatalogBuilder, PlanCatalog};
pub use company::InsuranceCompany;
pub use error::CatalogError;
pub use plan::{CoverageLimits, InsurancePlan};
pub use premium::PremiumEntry;
