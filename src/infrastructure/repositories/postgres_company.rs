// src/infrastructure/repositories/postgres_company.rs
use super::map_sqlx;
use crate::domain::company::{
    Company, CompanyDomain, CompanyId, CompanyListQuery, CompanyName, CompanyReadRepository,
    CompanyWriteRepository, EmployeeCount, NewCompany,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tenant::OrganizationId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COLUMNS: &str = "id, organization_id, name, domain, industry, employee_count, metadata, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCompanyWriteRepository {
    pool: PgPool,
}

impl PostgresCompanyWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCompanyReadRepository {
    pool: PgPool,
}

impl PostgresCompanyReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: Uuid,
    organization_id: Uuid,
    name: String,
    domain: Option<String>,
    industry: Option<String>,
    employee_count: Option<i32>,
    metadata: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for Company {
    type Error = DomainError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Ok(Company {
            id: CompanyId::new(row.id)?,
            organization_id: OrganizationId::new(row.organization_id)?,
            name: CompanyName::new(row.name)?,
            domain: row.domain.map(CompanyDomain::new).transpose()?,
            industry: row.industry,
            employee_count: row.employee_count.map(EmployeeCount::new).transpose()?,
            metadata: row.metadata,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escapes `LIKE` wildcards so user input only ever matches literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl CompanyWriteRepository for PostgresCompanyWriteRepository {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            "INSERT INTO companies (id, organization_id, name, domain, industry, employee_count, metadata, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(Uuid::from(company.id))
        .bind(Uuid::from(company.organization_id))
        .bind(company.name.as_str())
        .bind(company.domain.as_ref().map(CompanyDomain::as_str))
        .bind(company.industry)
        .bind(company.employee_count.map(EmployeeCount::get))
        .bind(company.metadata)
        .bind(company.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Company::try_from(row)
    }

    async fn update(&self, company: &Company) -> DomainResult<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            "UPDATE companies
             SET name = $3, domain = $4, industry = $5, employee_count = $6, metadata = $7, updated_at = $8
             WHERE organization_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        ))
        .bind(Uuid::from(company.organization_id))
        .bind(Uuid::from(company.id))
        .bind(company.name.as_str())
        .bind(company.domain.as_ref().map(CompanyDomain::as_str))
        .bind(company.industry.as_deref())
        .bind(company.employee_count.map(EmployeeCount::get))
        .bind(&company.metadata)
        .bind(company.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("company not found"))
    }

    async fn delete(&self, organization_id: OrganizationId, id: CompanyId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM companies WHERE organization_id = $1 AND id = $2")
            .bind(Uuid::from(organization_id))
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("company not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyReadRepository for PostgresCompanyReadRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: CompanyId,
    ) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COLUMNS} FROM companies WHERE organization_id = $1 AND id = $2"
        ))
        .bind(Uuid::from(organization_id))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from).transpose()
    }

    async fn list(
        &self,
        organization_id: OrganizationId,
        query: &CompanyListQuery,
    ) -> DomainResult<Vec<Company>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM companies WHERE organization_id = "));
        builder.push_bind(Uuid::from(organization_id));

        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = like_pattern(search);
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR domain ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY name ASC, id ASC LIMIT ");
        builder.push_bind(i64::from(query.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(query.offset));

        let rows = builder
            .build_query_as::<CompanyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Company::try_from).collect()
    }
}
