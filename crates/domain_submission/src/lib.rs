//! Submission Packaging Domain
//!
//! The last step of the comparison flow: validate the contact identity,
//! merge it with the canonical request into an outbound lead record, and
//! render a summary message for the operational lead queue.
//!
//! Identity validation is the *only* step in the whole core allowed to halt
//! the flow. The side-channel delivery to the lead sink is structurally
//! best-effort: it runs on a bounded queue behind a spawned worker, its
//! failures are logged and dropped, and the primary result is returned
//! regardless of its outcome.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod message;
pub mod packager;
pub mod sink;

pub use config::DispatchConfig;
pub use dispatch::LeadDispatcher;
pub use error::{FieldError, SubmissionError};
pub use identity::ContactIdentity;
pub use message::{LeadKind, LeadMessage, LeadPriority};
pub use packager::{package_submission, LeadRecord, SubmissionPackage};
pub use sink::{LeadSink, SinkError, SinkResponse};
