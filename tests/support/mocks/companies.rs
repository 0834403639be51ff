// tests/support/mocks/companies.rs
use abm_core::domain::company::{
    Company, CompanyId, CompanyListQuery, CompanyReadRepository, CompanyWriteRepository,
    NewCompany,
};
use abm_core::domain::errors::{DomainError, DomainResult};
use abm_core::domain::tenant::OrganizationId;
use async_trait::async_trait;
use std::sync::Mutex;

/// Both sides of the company store over one vector.
#[derive(Debug, Default)]
pub struct InMemoryCompanies {
    rows: Mutex<Vec<Company>>,
}

impl InMemoryCompanies {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CompanyWriteRepository for InMemoryCompanies {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let mut rows = self.rows.lock().unwrap();
        let duplicate = company.domain.is_some()
            && rows.iter().any(|c| {
                c.organization_id == company.organization_id && c.domain == company.domain
            });
        if duplicate {
            return Err(DomainError::Conflict(
                "a company with this domain already exists".into(),
            ));
        }

        let stored = Company {
            id: company.id,
            organization_id: company.organization_id,
            name: company.name,
            domain: company.domain,
            industry: company.industry,
            employee_count: company.employee_count,
            metadata: company.metadata,
            created_at: company.created_at,
            updated_at: company.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, company: &Company) -> DomainResult<Company> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|c| c.id == company.id && c.organization_id == company.organization_id)
            .ok_or_else(|| DomainError::not_found("company not found"))?;
        *slot = company.clone();
        Ok(company.clone())
    }

    async fn delete(&self, organization_id: OrganizationId, id: CompanyId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.organization_id == organization_id));
        if rows.len() == before {
            return Err(DomainError::not_found("company not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyReadRepository for InMemoryCompanies {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: CompanyId,
    ) -> DomainResult<Option<Company>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.organization_id == organization_id)
            .cloned())
    }

    async fn list(
        &self,
        organization_id: OrganizationId,
        query: &CompanyListQuery,
    ) -> DomainResult<Vec<Company>> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut matches: Vec<Company> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.organization_id == organization_id)
            .filter(|c| {
                needle
                    .as_deref()
                    .is_none_or(|n| {
                        c.name.as_str().to_lowercase().contains(n)
                            || c.domain.as_ref().is_some_and(|d| d.as_str().contains(n))
                    })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(matches
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }
}
