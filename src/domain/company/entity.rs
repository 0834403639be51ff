// src/domain/company/entity.rs
use super::value_objects::{CompanyDomain, CompanyId, CompanyName, EmployeeCount};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tenant::OrganizationId;
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub organization_id: OrganizationId,
    pub name: CompanyName,
    pub domain: Option<CompanyDomain>,
    pub industry: Option<String>,
    pub employee_count: Option<EmployeeCount>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub id: CompanyId,
    pub organization_id: OrganizationId,
    pub name: CompanyName,
    pub domain: Option<CompanyDomain>,
    pub industry: Option<String>,
    pub employee_count: Option<EmployeeCount>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

/// Partial update. The outer `Option` means "leave untouched"; for nullable
/// fields the inner `None` clears the value.
#[derive(Debug, Clone, Default)]
pub struct CompanyChanges {
    pub name: Option<CompanyName>,
    pub domain: Option<Option<CompanyDomain>>,
    pub industry: Option<Option<String>>,
    pub employee_count: Option<Option<EmployeeCount>>,
    pub metadata: Option<Value>,
}

impl CompanyChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.domain.is_none()
            && self.industry.is_none()
            && self.employee_count.is_none()
            && self.metadata.is_none()
    }
}

pub(crate) fn ensure_metadata_object(metadata: &Value) -> DomainResult<()> {
    if metadata.is_object() {
        Ok(())
    } else {
        Err(DomainError::validation("metadata must be a JSON object"))
    }
}

impl Company {
    pub fn apply(&mut self, changes: CompanyChanges, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(metadata) = &changes.metadata {
            ensure_metadata_object(metadata)?;
        }

        let CompanyChanges {
            name,
            domain,
            industry,
            employee_count,
            metadata,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(domain) = domain {
            self.domain = domain;
        }
        if let Some(industry) = industry {
            self.industry = industry;
        }
        if let Some(employee_count) = employee_count {
            self.employee_count = employee_count;
        }
        if let Some(metadata) = metadata {
            self.metadata = metadata;
        }
        self.updated_at = now;
        Ok(())
    }
}
