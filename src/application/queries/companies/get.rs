use super::CompanyQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::company::CompanyId,
};
use uuid::Uuid;

pub struct GetCompanyQuery {
    pub id: Uuid,
}

impl CompanyQueryService {
    pub async fn get_company(
        &self,
        ctx: &RequestContext,
        query: GetCompanyQuery,
    ) -> ApplicationResult<CompanyDto> {
        let organization_id = self.tenant.require_organization(ctx).await?;
        let id = CompanyId::new(query.id)?;

        self.read_repo
            .find_by_id(organization_id, id)
            .await?
            .map(CompanyDto::from)
            .ok_or_else(|| ApplicationError::not_found("company not found"))
    }
}
