//! Submission packaging
//!
//! Merges a validated contact identity with the canonical request into the
//! outbound lead record, and renders the side-channel message alongside it.
//! The two artifacts are produced together but consumed independently: the
//! record is the primary result, the message rides the best-effort queue.

use chrono::{DateTime, Utc};
use core_kernel::LeadId;
use domain_quote::QuoteRequest;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::identity::ContactIdentity;
use crate::message::LeadMessage;

/// The outbound lead record handed to downstream lead tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub request: QuoteRequest,
    pub submitted_at: DateTime<Utc>,
}

/// The packaged submission: primary record plus side-channel message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPackage {
    pub record: LeadRecord,
    pub side_channel: LeadMessage,
}

/// Validates the identity and packages the submission
///
/// This is the only fallible step in the core: invalid contact details
/// return field-keyed errors and block forward progress. Everything after
/// a successful return is infallible.
pub fn package_submission(
    request: &QuoteRequest,
    name: &str,
    phone: &str,
) -> Result<SubmissionPackage, SubmissionError> {
    let identity = ContactIdentity::new(name, phone)?;
    let side_channel = LeadMessage::for_quote(request, &identity);

    let record = LeadRecord {
        id: LeadId::new_v7(),
        name: identity.name,
        phone: identity.phone,
        request: request.clone(),
        submitted_at: Utc::now(),
    };

    Ok(SubmissionPackage {
        record,
        side_channel,
    })
}
