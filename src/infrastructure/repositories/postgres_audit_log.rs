// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::{
    AuditLogCursor, AuditLogEntry, AuditLogFilter, AuditLogRepository, NewAuditLogEntry,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tenant::{OrganizationId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, organization_id, entity_type, entity_id, action, user_id, \
     user_email, ip_address, user_agent, old_values, new_values, changed_fields, metadata, \
     created_at FROM audit_logs";

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    organization_id: Option<Uuid>,
    entity_type: String,
    entity_id: Option<Uuid>,
    action: String,
    user_id: Option<Uuid>,
    user_email: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    old_values: Option<Value>,
    new_values: Option<Value>,
    changed_fields: Option<Vec<String>>,
    metadata: Option<Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLogEntry {
            id: row.id,
            organization_id: row.organization_id.map(OrganizationId::new).transpose()?,
            entity_type: row.entity_type.parse()?,
            entity_id: row.entity_id,
            action: row.action.parse()?,
            user_id: row.user_id.map(UserId::new).transpose()?,
            user_email: row.user_email,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            old_values: row.old_values,
            new_values: row.new_values,
            changed_fields: row.changed_fields,
            metadata: row.metadata,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, entry: NewAuditLogEntry) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (
                organization_id, entity_type, entity_id, action, user_id, user_email,
                ip_address, user_agent, old_values, new_values, changed_fields, metadata, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(entry.organization_id.map(Uuid::from))
        .bind(entry.entity_type.as_str())
        .bind(entry.entity_id)
        .bind(entry.action.as_str())
        .bind(entry.user_id.map(Uuid::from))
        .bind(entry.user_email)
        .bind(entry.ip_address)
        .bind(entry.user_agent)
        .bind(entry.old_values)
        .bind(entry.new_values)
        .bind(entry.changed_fields)
        .bind(entry.metadata)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list(
        &self,
        organization_id: OrganizationId,
        filter: &AuditLogFilter,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<String>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        builder.push(" WHERE organization_id = ");
        builder.push_bind(Uuid::from(organization_id));

        if let Some(entity_type) = filter.entity_type {
            builder.push(" AND entity_type = ");
            builder.push_bind(entity_type.as_str());
        }
        if let Some(entity_id) = filter.entity_id {
            builder.push(" AND entity_id = ");
            builder.push_bind(entity_id);
        }
        if let Some(cursor) = &cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<AuditLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut entries = rows
            .into_iter()
            .map(AuditLogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if entries.len() > limit as usize {
            entries.pop();
            if let Some(last) = entries.last() {
                next_cursor = Some(AuditLogCursor::new(last.created_at, last.id).encode());
            }
        }

        Ok((entries, next_cursor))
    }
}
