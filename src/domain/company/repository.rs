use super::entity::{Company, NewCompany};
use super::value_objects::CompanyId;
use crate::domain::errors::DomainResult;
use crate::domain::tenant::OrganizationId;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CompanyListQuery {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
}

#[async_trait]
pub trait CompanyWriteRepository: Send + Sync {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company>;
    /// Persists every mutable column of `company`, scoped to its organization.
    async fn update(&self, company: &Company) -> DomainResult<Company>;
    async fn delete(&self, organization_id: OrganizationId, id: CompanyId) -> DomainResult<()>;
}

#[async_trait]
pub trait CompanyReadRepository: Send + Sync {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: CompanyId,
    ) -> DomainResult<Option<Company>>;
    async fn list(
        &self,
        organization_id: OrganizationId,
        query: &CompanyListQuery,
    ) -> DomainResult<Vec<Company>>;
}
