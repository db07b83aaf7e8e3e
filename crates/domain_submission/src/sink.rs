//! The lead/contact sink port
//!
//! The engine owns no wire protocol; delivery to the operational lead queue
//! goes through this trait so the transport (internal API, CRM, mock) is
//! swappable at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::LeadMessage;

/// Response from the lead sink
///
/// The contract is deliberately loose: any response whose `success` is not
/// explicitly `false` counts as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl SinkResponse {
    /// True unless the sink explicitly said `success: false`
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }
}

/// Errors a sink implementation may raise; all are non-fatal to the caller
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Lead sink unavailable: {0}")]
    Unavailable(String),

    #[error("Lead sink rejected the message: {0}")]
    Rejected(String),

    #[error("Lead sink timed out")]
    Timeout,
}

/// Port for delivering lead messages
///
/// Implementations must be safe to call concurrently; the dispatcher drives
/// this from a background worker.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, message: LeadMessage) -> Result<SinkResponse, SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_success_counts_as_success() {
        assert!(SinkResponse::default().is_success());
        assert!(SinkResponse {
            success: Some(true),
            message: None
        }
        .is_success());
        assert!(!SinkResponse {
            success: Some(false),
            message: Some("queue closed".to_string())
        }
        .is_success());
    }
}
