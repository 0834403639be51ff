use crate::domain::audit::{AuditAction, AuditLogEntry, EntityType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogDto {
    pub id: i64,
    pub organization_id: Option<Uuid>,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub action: AuditAction,
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub changed_fields: Option<Vec<String>>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLogEntry> for AuditLogDto {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            organization_id: entry.organization_id.map(Into::into),
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            action: entry.action,
            user_id: entry.user_id.map(Into::into),
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
}
