//! Quote Normalization Domain
//!
//! This crate converts the multi-step comparison form, with its overlapping
//! and partially-filled representations of the same facts, into a canonical
//! `QuoteRequest`. The same age can arrive as a birthdate, a range string
//! (`"30-40"`), an open-ended string (`"65+"`), a plain number, or
//! pre-resolved numeric bounds; budgets arrive in the same shapes plus a
//! slider scalar and a categorical coverage tier.
//!
//! # Design
//!
//! Each fact has a dedicated resolver implementing an explicit, ordered
//! precedence table as a pure function returning a tagged result. The
//! resolvers are total: a malformed or missing input resolves to
//! "unconstrained", never to an error and never to a NaN-like placeholder.
//!
//! ```rust,ignore
//! use domain_quote::{normalize, RawQuoteForm};
//!
//! let request = normalize(&form, today);
//! assert!(request.age_min.zip(request.age_max).map_or(true, |(lo, hi)| lo <= hi));
//! ```

pub mod age;
pub mod budget;
pub mod form;
pub mod normalizer;
pub mod request;
pub mod tier;

pub use age::{resolve_age, AgeResolution, AgeSource, OPEN_UPPER_AGE};
pub use budget::{resolve_budget, BudgetResolution, BudgetSource};
pub use form::RawQuoteForm;
pub use normalizer::normalize;
pub use request::{QuoteRequest, TypeSpecificFields};
pub use tier::{tier_eligible, CoverageTier};
