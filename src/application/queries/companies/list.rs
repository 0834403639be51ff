use super::CompanyQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{CompanyDto, Page},
        error::ApplicationResult,
        queries::audit::normalize_limit,
    },
    domain::company::CompanyListQuery,
};

#[derive(Debug, Default)]
pub struct ListCompaniesQuery {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
}

impl CompanyQueryService {
    pub async fn list_companies(
        &self,
        ctx: &RequestContext,
        query: ListCompaniesQuery,
    ) -> ApplicationResult<Page<CompanyDto>> {
        let organization_id = self.tenant.require_organization(ctx).await?;
        let limit = normalize_limit(query.limit);
        let search = query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let companies = self
            .read_repo
            .list(
                organization_id,
                &CompanyListQuery {
                    limit,
                    offset: query.offset,
                    search,
                },
            )
            .await?;

        Ok(Page {
            items: companies.into_iter().map(CompanyDto::from).collect(),
            limit,
            offset: query.offset,
        })
    }
}
