use super::cursor::AuditLogCursor;
use super::entity::{AuditLogEntry, AuditLogFilter, NewAuditLogEntry};
use crate::domain::errors::DomainResult;
use crate::domain::tenant::OrganizationId;
use async_trait::async_trait;

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, entry: NewAuditLogEntry) -> DomainResult<()>;

    /// Newest first. Returns the page and the encoded cursor of the next page, if any.
    async fn list(
        &self,
        organization_id: OrganizationId,
        filter: &AuditLogFilter,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<String>)>;
}
