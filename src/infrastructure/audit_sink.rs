use crate::application::ports::audit::{AuditFailure, AuditFailureSink};
use tracing::error;

/// Reports lost audit entries through the tracing subscriber.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditFailureSink;

impl AuditFailureSink for TracingAuditFailureSink {
    fn report(&self, failure: AuditFailure) {
        error!(
            action = %failure.action,
            entity_type = %failure.entity_type,
            entity_id = ?failure.entity_id,
            reason = %failure.kind,
            "audit entry lost"
        );
    }
}
