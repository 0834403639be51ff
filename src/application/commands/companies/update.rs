use super::{
    CompanyCommandService,
    service::{non_blank, parse_domain},
};
use crate::{
    application::{
        context::RequestContext,
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::EntityType,
        company::{CompanyChanges, CompanyId, CompanyName, EmployeeCount},
    },
};
use serde_json::Value;
use uuid::Uuid;

/// Outer `None` leaves a field alone; `Some(None)` clears a nullable field.
pub struct UpdateCompanyCommand {
    pub id: Uuid,
    pub name: Option<String>,
    pub domain: Option<Option<String>>,
    pub industry: Option<Option<String>>,
    pub employee_count: Option<Option<i32>>,
    pub metadata: Option<Value>,
}

impl UpdateCompanyCommand {
    fn into_changes(self) -> ApplicationResult<CompanyChanges> {
        Ok(CompanyChanges {
            name: self.name.map(CompanyName::new).transpose()?,
            domain: self.domain.map(parse_domain).transpose()?,
            industry: self.industry.map(non_blank),
            employee_count: self
                .employee_count
                .map(|count| count.map(EmployeeCount::new).transpose())
                .transpose()?,
            metadata: self.metadata,
        })
    }
}

impl CompanyCommandService {
    pub async fn update_company(
        &self,
        ctx: &RequestContext,
        command: UpdateCompanyCommand,
    ) -> ApplicationResult<CompanyDto> {
        let organization_id = self.tenant.require_organization(ctx).await?;
        let id = CompanyId::new(command.id)?;

        let mut company = self
            .read_repo
            .find_by_id(organization_id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("company not found"))?;
        let before = CompanyDto::from(&company);

        let changes = command.into_changes()?;
        if changes.is_empty() {
            return Ok(before);
        }

        company.apply(changes, self.clock.now())?;
        let after: CompanyDto = self.write_repo.update(&company).await?.into();

        self.audit.log_update(
            &ctx.audit_context(),
            EntityType::Company,
            after.id,
            &before,
            &after,
            None,
        );
        Ok(after)
    }
}
