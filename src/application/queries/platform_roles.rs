// src/application/queries/platform_roles.rs
use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext, dto::PlatformRoleGrantDto, error::ApplicationResult,
        tenant::TenantResolver,
    },
    domain::tenant::PlatformRoleRepository,
};

pub struct PlatformRoleQueryService {
    tenant: Arc<TenantResolver>,
    roles: Arc<dyn PlatformRoleRepository>,
}

impl PlatformRoleQueryService {
    pub fn new(tenant: Arc<TenantResolver>, roles: Arc<dyn PlatformRoleRepository>) -> Self {
        Self { tenant, roles }
    }

    /// Visible to any platform role holder.
    pub async fn list_roles(
        &self,
        ctx: &RequestContext,
    ) -> ApplicationResult<Vec<PlatformRoleGrantDto>> {
        self.tenant.require_platform_role(ctx.session()).await?;
        let grants = self.roles.list().await?;
        Ok(grants.into_iter().map(PlatformRoleGrantDto::from).collect())
    }
}
