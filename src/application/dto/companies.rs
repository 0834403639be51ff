use crate::domain::company::{Company, EmployeeCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire shape of a company. Also the record the audit trail diffs, so field
/// order here is the order of `changed_fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub domain: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<i32>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id.into(),
            organization_id: company.organization_id.into(),
            name: company.name.as_str().to_string(),
            domain: company.domain.map(|d| d.as_str().to_string()),
            industry: company.industry,
            employee_count: company.employee_count.map(EmployeeCount::get),
            metadata: company.metadata,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl From<&Company> for CompanyDto {
    fn from(company: &Company) -> Self {
        company.clone().into()
    }
}
