//! Best-effort lead dispatch
//!
//! The side channel is structurally independent of the primary flow: a
//! bounded mpsc queue feeds a spawned worker that drives the sink. Enqueue
//! never blocks and never fails the caller; a full queue or a failed
//! delivery is logged and the message is dropped (at-most-once delivery,
//! no retries).

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::DispatchConfig;
use crate::message::LeadMessage;
use crate::sink::LeadSink;

/// Handle for enqueueing lead messages onto the side channel
#[derive(Debug, Clone)]
pub struct LeadDispatcher {
    tx: mpsc::Sender<LeadMessage>,
}

impl LeadDispatcher {
    /// Spawns the delivery worker and returns the enqueue handle
    ///
    /// The worker runs until every handle is dropped and the queue drains.
    pub fn spawn(sink: Arc<dyn LeadSink>, config: DispatchConfig) -> Self {
        let (tx, mut rx) = mpsc::channel::<LeadMessage>(config.queue_capacity);
        let subject_prefix = config.subject_prefix.clone();

        tokio::spawn(async move {
            info!("lead dispatcher started");
            while let Some(mut message) = rx.recv().await {
                if let Some(ref prefix) = subject_prefix {
                    message.subject = format!("{prefix} {}", message.subject);
                }
                match sink.deliver(message).await {
                    Ok(response) if response.is_success() => {
                        debug!("lead delivered to sink");
                    }
                    Ok(response) => {
                        warn!(
                            reason = response.message.as_deref().unwrap_or("unspecified"),
                            "lead sink reported failure; message dropped"
                        );
                    }
                    Err(err) => {
                        warn!(error = %err, "lead delivery failed; message dropped");
                    }
                }
            }
            info!("lead dispatcher stopped");
        });

        Self { tx }
    }

    /// Enqueues a message without blocking
    ///
    /// A full or closed queue drops the message; the caller's primary flow
    /// is never affected.
    pub fn enqueue(&self, message: LeadMessage) {
        if let Err(err) = self.tx.try_send(message) {
            warn!(error = %err, "lead queue unavailable; message dropped");
        }
    }
}
