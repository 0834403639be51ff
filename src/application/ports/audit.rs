// src/application/ports/audit.rs
use crate::domain::audit::{AuditAction, EntityType};
use std::fmt;

/// Why an audit entry never reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFailureKind {
    /// The before/after state could not be turned into a JSON record.
    Serialization(String),
    /// The queue to the writer was full; the entry was dropped.
    QueueFull,
    /// The writer has shut down.
    QueueClosed,
    /// The store rejected the insert.
    Write(String),
}

impl fmt::Display for AuditFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditFailureKind::Serialization(err) => write!(f, "serialization failed: {err}"),
            AuditFailureKind::QueueFull => f.write_str("audit queue full"),
            AuditFailureKind::QueueClosed => f.write_str("audit queue closed"),
            AuditFailureKind::Write(err) => write!(f, "write failed: {err}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFailure {
    pub action: AuditAction,
    pub entity_type: EntityType,
    pub entity_id: Option<uuid::Uuid>,
    pub kind: AuditFailureKind,
}

/// Diagnostic channel for audit entries that were lost. Must not block.
pub trait AuditFailureSink: Send + Sync {
    fn report(&self, failure: AuditFailure);
}
