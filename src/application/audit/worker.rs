// src/application/audit/worker.rs
use std::{sync::Arc, time::Duration};

use super::logger::AuditLogger;
use crate::{
    application::ports::{
        audit::{AuditFailure, AuditFailureKind, AuditFailureSink},
        time::Clock,
    },
    domain::audit::{AuditLogRepository, NewAuditLogEntry},
};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

pub const DEFAULT_AUDIT_QUEUE_CAPACITY: usize = 1024;

/// Owns the background writer. Dropping it detaches the task.
pub struct AuditWorkerHandle {
    join: JoinHandle<()>,
}

impl AuditWorkerHandle {
    /// Waits for the writer to drain its queue. The queue only closes once
    /// every `AuditLogger` clone is gone. Returns `false` on timeout.
    pub async fn shutdown(self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.join).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                warn!(error = %err, "audit worker terminated abnormally");
                false
            }
            Err(_) => {
                warn!("audit worker did not drain before the shutdown deadline");
                false
            }
        }
    }
}

impl AuditLogger {
    /// Starts the writer task on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or when called outside a Tokio runtime.
    pub fn spawn(
        repo: Arc<dyn AuditLogRepository>,
        failures: Arc<dyn AuditFailureSink>,
        clock: Arc<dyn Clock>,
        capacity: usize,
    ) -> (Self, AuditWorkerHandle) {
        let (sender, receiver) = mpsc::channel(capacity);
        let join = tokio::spawn(run(receiver, repo, Arc::clone(&failures)));
        (
            AuditLogger::new(sender, failures, clock),
            AuditWorkerHandle { join },
        )
    }
}

async fn run(
    mut receiver: mpsc::Receiver<NewAuditLogEntry>,
    repo: Arc<dyn AuditLogRepository>,
    failures: Arc<dyn AuditFailureSink>,
) {
    while let Some(entry) = receiver.recv().await {
        let (action, entity_type, entity_id) = (entry.action, entry.entity_type, entry.entity_id);
        if let Err(err) = repo.insert(entry).await {
            failures.report(AuditFailure {
                action,
                entity_type,
                entity_id,
                kind: AuditFailureKind::Write(err.to_string()),
            });
        }
    }
    debug!("audit worker stopped");
}
