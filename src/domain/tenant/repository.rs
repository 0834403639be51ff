use super::entity::{NewPlatformRoleGrant, PlatformRoleGrant, Profile};
use super::value_objects::{OrganizationId, UserId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<Profile>>;
}

#[async_trait]
pub trait PlatformRoleRepository: Send + Sync {
    /// `Ok(None)` means the user holds no platform role.
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PlatformRoleGrant>>;
    async fn list(&self) -> DomainResult<Vec<PlatformRoleGrant>>;
    async fn upsert(&self, grant: NewPlatformRoleGrant) -> DomainResult<PlatformRoleGrant>;
    async fn delete(&self, user_id: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn exists(&self, id: OrganizationId) -> DomainResult<bool>;
}
