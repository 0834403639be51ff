// src/application/queries/tenant.rs
use crate::application::{
    context::RequestContext, dto::TenantDto, error::ApplicationResult, tenant::TenantResolver,
};

impl TenantResolver {
    /// Describes the tenant the caller is currently operating in.
    pub async fn current_tenant(&self, ctx: &RequestContext) -> ApplicationResult<TenantDto> {
        let organization_id = self.require_organization(ctx).await?;
        let platform_role = self.resolve_platform_role(ctx.session()).await;
        Ok(TenantDto {
            organization_id: organization_id.into(),
            platform_role,
        })
    }
}
