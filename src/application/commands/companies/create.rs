use super::{
    CompanyCommandService,
    service::{non_blank, parse_domain},
};
use crate::{
    application::{context::RequestContext, dto::CompanyDto, error::ApplicationResult},
    domain::{
        audit::EntityType,
        company::{CompanyId, CompanyName, EmployeeCount, NewCompany},
    },
};
use serde_json::Value;

pub struct CreateCompanyCommand {
    pub name: String,
    pub domain: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<i32>,
    pub metadata: Option<Value>,
}

impl CompanyCommandService {
    pub async fn create_company(
        &self,
        ctx: &RequestContext,
        command: CreateCompanyCommand,
    ) -> ApplicationResult<CompanyDto> {
        let organization_id = self.tenant.require_organization(ctx).await?;

        let metadata = command
            .metadata
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        crate::domain::company::entity::ensure_metadata_object(&metadata)?;

        let new_company = NewCompany {
            id: CompanyId::generate(),
            organization_id,
            name: CompanyName::new(command.name)?,
            domain: parse_domain(command.domain)?,
            industry: non_blank(command.industry),
            employee_count: command.employee_count.map(EmployeeCount::new).transpose()?,
            metadata,
            created_at: self.clock.now(),
        };

        let created: CompanyDto = self.write_repo.insert(new_company).await?.into();
        self.audit
            .log_create(&ctx.audit_context(), EntityType::Company, &created, None);
        Ok(created)
    }
}
