use super::{AuditQueryService, common};
use crate::{
    application::{
        context::RequestContext,
        dto::{AuditLogDto, CursorPage},
        error::ApplicationResult,
    },
    domain::audit::{AuditLogCursor, AuditLogFilter, EntityType},
};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct ListAuditLogsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
}

impl AuditQueryService {
    /// Audit trail of the caller's tenant, newest first.
    pub async fn list_audit_logs(
        &self,
        ctx: &RequestContext,
        query: ListAuditLogsQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        let organization_id = self.tenant.require_organization(ctx).await?;
        let limit = common::normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()?;
        let filter = AuditLogFilter {
            entity_type: query
                .entity_type
                .as_deref()
                .map(str::parse::<EntityType>)
                .transpose()?,
            entity_id: query.entity_id,
        };

        let (items, next_cursor) = self
            .repo
            .list(organization_id, &filter, limit, cursor)
            .await?;
        let dtos: Vec<_> = items.into_iter().map(AuditLogDto::from).collect();
        Ok(CursorPage::new(dtos, next_cursor))
    }
}
