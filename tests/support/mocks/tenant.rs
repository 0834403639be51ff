// tests/support/mocks/tenant.rs
use abm_core::domain::errors::{DomainError, DomainResult};
use abm_core::domain::tenant::{
    NewPlatformRoleGrant, OrganizationId, OrganizationRepository, PlatformRole,
    PlatformRoleGrant, PlatformRoleRepository, Profile, ProfileRepository, UserId,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryProfiles {
    rows: Mutex<HashMap<UserId, Profile>>,
}

impl InMemoryProfiles {
    pub fn insert(&self, id: UserId, organization_id: Option<OrganizationId>) {
        self.rows.lock().unwrap().insert(
            id,
            Profile {
                id,
                email: Some(format!("{id}@example.com")),
                full_name: None,
                organization_id,
            },
        );
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<Profile>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPlatformRoles {
    rows: Mutex<Vec<PlatformRoleGrant>>,
}

impl InMemoryPlatformRoles {
    pub fn grant(&self, user_id: UserId, role: PlatformRole) {
        self.rows.lock().unwrap().push(PlatformRoleGrant {
            user_id,
            role,
            granted_by: None,
            created_at: super::fixed_now(),
        });
    }

    pub fn role_of(&self, user_id: UserId) -> Option<PlatformRole> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.user_id == user_id)
            .map(|g| g.role)
    }
}

#[async_trait]
impl PlatformRoleRepository for InMemoryPlatformRoles {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PlatformRoleGrant>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.user_id == user_id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<PlatformRoleGrant>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn upsert(&self, grant: NewPlatformRoleGrant) -> DomainResult<PlatformRoleGrant> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|g| g.user_id != grant.user_id);
        let stored = PlatformRoleGrant {
            user_id: grant.user_id,
            role: grant.role,
            granted_by: grant.granted_by,
            created_at: grant.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, user_id: UserId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|g| g.user_id != user_id);
        if rows.len() == before {
            return Err(DomainError::not_found("platform role not found"));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrganizations {
    ids: Mutex<HashSet<OrganizationId>>,
}

impl InMemoryOrganizations {
    pub fn insert(&self, id: OrganizationId) {
        self.ids.lock().unwrap().insert(id);
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizations {
    async fn exists(&self, id: OrganizationId) -> DomainResult<bool> {
        Ok(self.ids.lock().unwrap().contains(&id))
    }
}

/// Every lookup fails as if the database were unreachable.
#[derive(Debug, Default, Clone)]
pub struct FailingTenantStore;

fn unavailable() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl ProfileRepository for FailingTenantStore {
    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<Profile>> {
        Err(unavailable())
    }
}

#[async_trait]
impl PlatformRoleRepository for FailingTenantStore {
    async fn find_by_user(&self, _user_id: UserId) -> DomainResult<Option<PlatformRoleGrant>> {
        Err(unavailable())
    }

    async fn list(&self) -> DomainResult<Vec<PlatformRoleGrant>> {
        Err(unavailable())
    }

    async fn upsert(&self, _grant: NewPlatformRoleGrant) -> DomainResult<PlatformRoleGrant> {
        Err(unavailable())
    }

    async fn delete(&self, _user_id: UserId) -> DomainResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl OrganizationRepository for FailingTenantStore {
    async fn exists(&self, _id: OrganizationId) -> DomainResult<bool> {
        Err(unavailable())
    }
}
