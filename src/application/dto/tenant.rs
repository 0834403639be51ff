use crate::domain::tenant::{PlatformRole, PlatformRoleGrant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant the current caller is operating in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantDto {
    pub organization_id: Uuid,
    pub platform_role: Option<PlatformRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRoleGrantDto {
    pub user_id: Uuid,
    pub role: PlatformRole,
    pub granted_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<PlatformRoleGrant> for PlatformRoleGrantDto {
    fn from(grant: PlatformRoleGrant) -> Self {
        Self {
            user_id: grant.user_id.into(),
            role: grant.role,
            granted_by: grant.granted_by.map(Into::into),
            created_at: grant.created_at,
        }
    }
}
