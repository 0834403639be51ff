// tests/support/mocks/audit.rs
use abm_core::application::ports::audit::{AuditFailure, AuditFailureSink};
use abm_core::domain::audit::{
    AuditLogCursor, AuditLogEntry, AuditLogFilter, AuditLogRepository, NewAuditLogEntry,
};
use abm_core::domain::errors::{DomainError, DomainResult};
use abm_core::domain::tenant::OrganizationId;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

fn stored(id: i64, entry: NewAuditLogEntry) -> AuditLogEntry {
    AuditLogEntry {
        id,
        organization_id: entry.organization_id,
        entity_type: entry.entity_type,
        entity_id: entry.entity_id,
        action: entry.action,
        user_id: entry.user_id,
        user_email: entry.user_email,
        ip_address: entry.ip_address,
        user_agent: entry.user_agent,
        old_values: entry.old_values,
        new_values: entry.new_values,
        changed_fields: entry.changed_fields,
        metadata: entry.metadata,
        created_at: entry.created_at,
    }
}

/// Append-only store with the same ordering and paging rules as the
/// Postgres adapter.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepo {
    rows: Mutex<Vec<AuditLogEntry>>,
}

impl InMemoryAuditRepo {
    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.rows.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn push(&self, entry: NewAuditLogEntry) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len()).unwrap() + 1;
        rows.push(stored(id, entry));
        id
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepo {
    async fn insert(&self, entry: NewAuditLogEntry) -> DomainResult<()> {
        self.push(entry);
        Ok(())
    }

    async fn list(
        &self,
        organization_id: OrganizationId,
        filter: &AuditLogFilter,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<String>)> {
        let mut rows: Vec<AuditLogEntry> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.organization_id == Some(organization_id))
            .filter(|e| filter.entity_type.is_none_or(|t| e.entity_type == t))
            .filter(|e| filter.entity_id.is_none_or(|id| e.entity_id == Some(id)))
            .filter(|e| {
                cursor
                    .as_ref()
                    .is_none_or(|c| (e.created_at, e.id) < (c.created_at, c.id))
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let limit = limit as usize;
        let next_cursor = if rows.len() > limit {
            rows.truncate(limit);
            rows.last()
                .map(|last| AuditLogCursor::new(last.created_at, last.id).encode())
        } else {
            None
        };
        Ok((rows, next_cursor))
    }
}

/// Store that rejects every write.
#[derive(Debug, Default)]
pub struct FailingAuditRepo;

#[async_trait]
impl AuditLogRepository for FailingAuditRepo {
    async fn insert(&self, _entry: NewAuditLogEntry) -> DomainResult<()> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn list(
        &self,
        _organization_id: OrganizationId,
        _filter: &AuditLogFilter,
        _limit: u32,
        _cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<String>)> {
        Err(DomainError::Persistence("disk full".into()))
    }
}

/// Store whose writes block until the test releases them.
#[derive(Debug)]
pub struct GatedAuditRepo {
    gate: Semaphore,
    started: AtomicUsize,
    inner: InMemoryAuditRepo,
}

impl Default for GatedAuditRepo {
    fn default() -> Self {
        Self {
            gate: Semaphore::new(0),
            started: AtomicUsize::new(0),
            inner: InMemoryAuditRepo::default(),
        }
    }
}

impl GatedAuditRepo {
    pub fn release(&self, writes: usize) {
        self.gate.add_permits(writes);
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl AuditLogRepository for GatedAuditRepo {
    async fn insert(&self, entry: NewAuditLogEntry) -> DomainResult<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| DomainError::Persistence("gate closed".into()))?;
        permit.forget();
        self.inner.insert(entry).await
    }

    async fn list(
        &self,
        organization_id: OrganizationId,
        filter: &AuditLogFilter,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<String>)> {
        self.inner.list(organization_id, filter, limit, cursor).await
    }
}

#[derive(Debug, Default)]
pub struct CapturingFailureSink {
    failures: Mutex<Vec<AuditFailure>>,
}

impl CapturingFailureSink {
    pub fn failures(&self) -> Vec<AuditFailure> {
        self.failures.lock().unwrap().clone()
    }
}

impl AuditFailureSink for CapturingFailureSink {
    fn report(&self, failure: AuditFailure) {
        self.failures.lock().unwrap().push(failure);
    }
}
