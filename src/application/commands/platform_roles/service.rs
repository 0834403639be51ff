// src/application/commands/platform_roles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext,
        dto::Session,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        tenant::TenantResolver,
    },
    domain::tenant::{PlatformRoleRepository, ProfileRepository},
};

pub struct PlatformRoleCommandService {
    pub(super) tenant: Arc<TenantResolver>,
    pub(super) profiles: Arc<dyn ProfileRepository>,
    pub(super) roles: Arc<dyn PlatformRoleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PlatformRoleCommandService {
    pub fn new(
        tenant: Arc<TenantResolver>,
        profiles: Arc<dyn ProfileRepository>,
        roles: Arc<dyn PlatformRoleRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tenant,
            profiles,
            roles,
            clock,
        }
    }

    /// Returns the acting session once it is known to hold `platform_owner`.
    pub(super) async fn ensure_role_manager<'a>(
        &self,
        ctx: &'a RequestContext,
    ) -> ApplicationResult<&'a Session> {
        let role = self.tenant.require_platform_role(ctx.session()).await?;
        if !role.can_manage_roles() {
            return Err(ApplicationError::forbidden(
                "only platform owners can manage platform roles",
            ));
        }
        ctx.session()
            .ok_or_else(|| ApplicationError::forbidden("platform role required"))
    }
}
