//! Lead queue messages
//!
//! The side channel carries a deterministic, human-readable summary of the
//! request to the operational lead/query queue. Rendering depends only on
//! the request contents, so the same request always produces the same
//! message text.

use core_kernel::InsuranceType;
use domain_quote::QuoteRequest;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::identity::ContactIdentity;

/// How the lead should be worked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    /// A standard enquiry from the comparison flow
    Contact,
    /// The user asked to be called back
    Callback,
}

/// Triage priority on the lead queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

impl LeadPriority {
    /// Seniors leads are triaged first; that mirrors how the sales desk
    /// works the queue today
    pub fn for_insurance_type(insurance_type: InsuranceType) -> Self {
        match insurance_type {
            InsuranceType::Seniors => LeadPriority::High,
            _ => LeadPriority::Medium,
        }
    }
}

/// The message delivered to the lead sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadMessage {
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: LeadKind,
    pub priority: LeadPriority,
}

impl LeadMessage {
    /// Renders the summary message for a quote comparison submission
    pub fn for_quote(request: &QuoteRequest, identity: &ContactIdentity) -> Self {
        Self {
            name: identity.name.clone(),
            phone: identity.phone.clone(),
            subject: format!("{} quote request", request.insurance_type.label()),
            message: render_summary(request),
            kind: LeadKind::Contact,
            priority: LeadPriority::for_insurance_type(request.insurance_type),
        }
    }
}

fn render_summary(request: &QuoteRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Product: {}", request.insurance_type.label());
    let _ = writeln!(out, "Age: {}", age_line(request));
    let _ = writeln!(out, "Budget: {}", budget_line(request));
    if let Some(tier) = request.coverage_tier {
        let _ = writeln!(out, "Coverage tier: {}", tier);
    }

    let ts = &request.type_specific;
    if let Some(ref accident_type) = ts.accident_type {
        let _ = writeln!(out, "Accident cover: {accident_type}");
    }
    if let Some(coverage) = ts.coverage_amount {
        let _ = writeln!(out, "Cover amount: KSh {coverage}");
    }
    if let Some(ref destination) = ts.destination {
        let _ = writeln!(out, "Destination: {destination}");
    }
    if let Some(ref trip_type) = ts.trip_type {
        let _ = writeln!(out, "Trip type: {trip_type}");
    }
    if let Some(ref duration) = ts.trip_duration {
        let _ = writeln!(out, "Trip duration: {duration}");
    }
    if let Some(count) = ts.traveller_count {
        let _ = writeln!(out, "Travellers: {count}");
    }
    if !ts.additional_benefits.is_empty() {
        let _ = writeln!(out, "Additional benefits: {}", ts.additional_benefits.join(", "));
    }

    out.trim_end().to_string()
}

fn age_line(request: &QuoteRequest) -> String {
    match (request.age_exact, request.age_min, request.age_max) {
        (Some(age), _, _) => age.to_string(),
        (None, Some(min), Some(max)) => format!("{min}-{max}"),
        (None, Some(min), None) => format!("{min}+"),
        (None, None, Some(max)) => format!("up to {max}"),
        (None, None, None) => "not specified".to_string(),
    }
}

fn budget_line(request: &QuoteRequest) -> String {
    if request.tier_filter_active {
        return "filtered by coverage tier".to_string();
    }
    match (request.budget_min, request.budget_max) {
        (Some(min), Some(max)) => format!("KSh {min}-{max}"),
        (Some(min), None) => format!("KSh {min}+"),
        (None, Some(max)) => format!("up to KSh {max}"),
        (None, None) => "not specified".to_string(),
    }
}
