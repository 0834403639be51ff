// src/domain/tenant/entity.rs
use super::value_objects::{OrganizationId, UserId};
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: UserId,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Home tenant. `None` until onboarding completes.
    pub organization_id: Option<OrganizationId>,
}

/// Cross-tenant capability held by support and administration accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "platform_role", rename_all = "snake_case")]
pub enum PlatformRole {
    PlatformOwner,
    PlatformAdmin,
}

impl PlatformRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformRole::PlatformOwner => "platform_owner",
            PlatformRole::PlatformAdmin => "platform_admin",
        }
    }

    /// Only owners may hand out or take away platform roles.
    pub fn can_manage_roles(&self) -> bool {
        matches!(self, PlatformRole::PlatformOwner)
    }
}

impl fmt::Display for PlatformRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform_owner" => Ok(PlatformRole::PlatformOwner),
            "platform_admin" => Ok(PlatformRole::PlatformAdmin),
            other => Err(DomainError::validation(format!(
                "unknown platform role: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformRoleGrant {
    pub user_id: UserId,
    pub role: PlatformRole,
    pub granted_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPlatformRoleGrant {
    pub user_id: UserId,
    pub role: PlatformRole,
    pub granted_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}
