// src/application/audit/logger.rs
use std::sync::Arc;

use crate::{
    application::{
        context::AuditContext,
        ports::{
            audit::{AuditFailure, AuditFailureKind, AuditFailureSink},
            time::Clock,
        },
    },
    domain::{
        audit::{AuditAction, EntityType, NewAuditLogEntry, Record, compute_changes},
        tenant::OrganizationId,
    },
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

/// What happened to a log call. Purely informational; callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditDispatch {
    /// Handed to the background writer.
    Queued,
    /// Update with no tracked field changes; nothing to write.
    Unchanged,
    /// Lost before reaching the writer; reported to the failure sink.
    Dropped,
}

/// Fire-and-forget front of the audit trail.
///
/// Every entry point returns immediately. The store write happens on the
/// background worker, and no failure ever propagates back to the caller.
#[derive(Clone)]
pub struct AuditLogger {
    sender: mpsc::Sender<NewAuditLogEntry>,
    failures: Arc<dyn AuditFailureSink>,
    clock: Arc<dyn Clock>,
}

struct Subject {
    action: AuditAction,
    entity_type: EntityType,
    entity_id: Option<Uuid>,
}

impl Subject {
    fn failure(&self, kind: AuditFailureKind) -> AuditFailure {
        AuditFailure {
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            kind,
        }
    }
}

impl AuditLogger {
    pub(super) fn new(
        sender: mpsc::Sender<NewAuditLogEntry>,
        failures: Arc<dyn AuditFailureSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sender,
            failures,
            clock,
        }
    }

    pub fn log_create<T: Serialize + ?Sized>(
        &self,
        ctx: &AuditContext,
        entity_type: EntityType,
        record: &T,
        metadata: Option<Value>,
    ) -> AuditDispatch {
        let mut subject = Subject {
            action: AuditAction::Create,
            entity_type,
            entity_id: None,
        };
        let Some(new) = self.to_record(&subject, record) else {
            return AuditDispatch::Dropped;
        };
        subject.entity_id = record_uuid(&new, "id");
        let organization_id = record_organization(&new);

        self.dispatch(ctx, &subject, organization_id, None, Some(&new), metadata)
    }

    pub fn log_update<T: Serialize + ?Sized>(
        &self,
        ctx: &AuditContext,
        entity_type: EntityType,
        entity_id: Uuid,
        old_record: &T,
        new_record: &T,
        metadata: Option<Value>,
    ) -> AuditDispatch {
        let subject = Subject {
            action: AuditAction::Update,
            entity_type,
            entity_id: Some(entity_id),
        };
        let Some(old) = self.to_record(&subject, old_record) else {
            return AuditDispatch::Dropped;
        };
        let Some(new) = self.to_record(&subject, new_record) else {
            return AuditDispatch::Dropped;
        };
        let organization_id = record_organization(&new).or_else(|| record_organization(&old));

        self.dispatch(ctx, &subject, organization_id, Some(&old), Some(&new), metadata)
    }

    pub fn log_delete<T: Serialize + ?Sized>(
        &self,
        ctx: &AuditContext,
        entity_type: EntityType,
        deleted_record: &T,
        metadata: Option<Value>,
    ) -> AuditDispatch {
        let mut subject = Subject {
            action: AuditAction::Delete,
            entity_type,
            entity_id: None,
        };
        let Some(old) = self.to_record(&subject, deleted_record) else {
            return AuditDispatch::Dropped;
        };
        subject.entity_id = record_uuid(&old, "id");
        let organization_id = record_organization(&old);

        self.dispatch(ctx, &subject, organization_id, Some(&old), None, metadata)
    }

    fn dispatch(
        &self,
        ctx: &AuditContext,
        subject: &Subject,
        organization_id: Option<OrganizationId>,
        old: Option<&Record>,
        new: Option<&Record>,
        metadata: Option<Value>,
    ) -> AuditDispatch {
        let Some(changes) = compute_changes(subject.action, old, new) else {
            return AuditDispatch::Unchanged;
        };

        let entry = NewAuditLogEntry {
            organization_id,
            entity_type: subject.entity_type,
            entity_id: subject.entity_id,
            action: subject.action,
            user_id: ctx.actor.as_ref().map(|s| s.user_id),
            user_email: ctx.actor.as_ref().and_then(|s| s.email.clone()),
            ip_address: ctx.client.ip_address.clone(),
            user_agent: ctx.client.user_agent.clone(),
            old_values: changes.old_values.map(Value::Object),
            new_values: changes.new_values.map(Value::Object),
            changed_fields: changes.changed_fields,
            metadata,
            created_at: self.clock.now(),
        };

        match self.sender.try_send(entry) {
            Ok(()) => AuditDispatch::Queued,
            Err(TrySendError::Full(_)) => {
                self.failures.report(subject.failure(AuditFailureKind::QueueFull));
                AuditDispatch::Dropped
            }
            Err(TrySendError::Closed(_)) => {
                self.failures
                    .report(subject.failure(AuditFailureKind::QueueClosed));
                AuditDispatch::Dropped
            }
        }
    }

    fn to_record<T: Serialize + ?Sized>(&self, subject: &Subject, value: &T) -> Option<Record> {
        match serde_json::to_value(value) {
            Ok(Value::Object(record)) => Some(record),
            Ok(other) => {
                self.failures
                    .report(subject.failure(AuditFailureKind::Serialization(format!(
                        "expected a JSON object, got {}",
                        json_kind(&other)
                    ))));
                None
            }
            Err(err) => {
                self.failures
                    .report(subject.failure(AuditFailureKind::Serialization(err.to_string())));
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn record_uuid(record: &Record, key: &str) -> Option<Uuid> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

fn record_organization(record: &Record) -> Option<OrganizationId> {
    record_uuid(record, "organization_id").and_then(|id| OrganizationId::new(id).ok())
}
