use super::CompanyCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{audit::EntityType, company::CompanyId},
};
use uuid::Uuid;

pub struct DeleteCompanyCommand {
    pub id: Uuid,
}

impl CompanyCommandService {
    pub async fn delete_company(
        &self,
        ctx: &RequestContext,
        command: DeleteCompanyCommand,
    ) -> ApplicationResult<()> {
        let organization_id = self.tenant.require_organization(ctx).await?;
        let id = CompanyId::new(command.id)?;

        let company = self
            .read_repo
            .find_by_id(organization_id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("company not found"))?;

        self.write_repo.delete(organization_id, id).await?;

        self.audit.log_delete(
            &ctx.audit_context(),
            EntityType::Company,
            &CompanyDto::from(company),
            None,
        );
        Ok(())
    }
}
