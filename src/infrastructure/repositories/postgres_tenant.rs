// src/infrastructure/repositories/postgres_tenant.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tenant::{
    NewPlatformRoleGrant, OrganizationId, OrganizationRepository, PlatformRole,
    PlatformRoleGrant, PlatformRoleRepository, Profile, ProfileRepository, UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPlatformRoleRepository {
    pool: PgPool,
}

impl PostgresPlatformRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    email: Option<String>,
    full_name: Option<String>,
    organization_id: Option<Uuid>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: UserId::new(row.id)?,
            email: row.email,
            full_name: row.full_name,
            organization_id: row.organization_id.map(OrganizationId::new).transpose()?,
        })
    }
}

#[derive(Debug, FromRow)]
struct PlatformRoleRow {
    user_id: Uuid,
    role: PlatformRole,
    granted_by: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PlatformRoleRow> for PlatformRoleGrant {
    type Error = DomainError;

    fn try_from(row: PlatformRoleRow) -> Result<Self, Self::Error> {
        Ok(PlatformRoleGrant {
            user_id: UserId::new(row.user_id)?,
            role: row.role,
            granted_by: row.granted_by.map(UserId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, full_name, organization_id FROM profiles WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }
}

#[async_trait]
impl PlatformRoleRepository for PostgresPlatformRoleRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PlatformRoleGrant>> {
        let row = sqlx::query_as::<_, PlatformRoleRow>(
            "SELECT user_id, role, granted_by, created_at FROM platform_roles WHERE user_id = $1",
        )
        .bind(Uuid::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PlatformRoleGrant::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<PlatformRoleGrant>> {
        let rows = sqlx::query_as::<_, PlatformRoleRow>(
            "SELECT user_id, role, granted_by, created_at FROM platform_roles ORDER BY created_at ASC, user_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PlatformRoleGrant::try_from).collect()
    }

    async fn upsert(&self, grant: NewPlatformRoleGrant) -> DomainResult<PlatformRoleGrant> {
        let row = sqlx::query_as::<_, PlatformRoleRow>(
            r#"
            INSERT INTO platform_roles (user_id, role, granted_by, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
                SET role = EXCLUDED.role, granted_by = EXCLUDED.granted_by
            RETURNING user_id, role, granted_by, created_at
            "#,
        )
        .bind(Uuid::from(grant.user_id))
        .bind(grant.role)
        .bind(grant.granted_by.map(Uuid::from))
        .bind(grant.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PlatformRoleGrant::try_from(row)
    }

    async fn delete(&self, user_id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM platform_roles WHERE user_id = $1")
            .bind(Uuid::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("platform role not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn exists(&self, id: OrganizationId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM organizations WHERE id = $1)")
            .bind(Uuid::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
