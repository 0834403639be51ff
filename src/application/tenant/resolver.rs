// src/application/tenant/resolver.rs
use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext,
        dto::Session,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tenant::{
        OrganizationId, OrganizationRepository, PlatformRole, PlatformRoleRepository,
        ProfileRepository,
    },
};
use tracing::{debug, warn};

/// How far a platform user's active-organization cookie is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrganizationSelectionPolicy {
    /// Any well-formed organization id is accepted as-is.
    #[default]
    Trusted,
    /// The selected organization must exist.
    VerifyExists,
}

/// Decides which tenant's data the caller may touch.
///
/// Every lookup failure degrades to "no tenant"; callers treat `None` as deny.
pub struct TenantResolver {
    profiles: Arc<dyn ProfileRepository>,
    platform_roles: Arc<dyn PlatformRoleRepository>,
    organizations: Arc<dyn OrganizationRepository>,
    selection_policy: OrganizationSelectionPolicy,
}

impl TenantResolver {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        platform_roles: Arc<dyn PlatformRoleRepository>,
        organizations: Arc<dyn OrganizationRepository>,
        selection_policy: OrganizationSelectionPolicy,
    ) -> Self {
        Self {
            profiles,
            platform_roles,
            organizations,
            selection_policy,
        }
    }

    pub async fn resolve_organization(&self, ctx: &RequestContext) -> Option<OrganizationId> {
        let session = ctx.session()?;

        if self.lookup_platform_role(session).await.is_some() {
            if let Some(selected) = selected_organization(ctx.active_organization.as_deref()) {
                return self.accept_selection(selected).await;
            }
        }

        match self.profiles.find_by_id(session.user_id).await {
            Ok(Some(profile)) => profile.organization_id,
            Ok(None) => {
                debug!(user_id = %session.user_id, "no profile for session user");
                None
            }
            Err(err) => {
                warn!(user_id = %session.user_id, error = %err, "profile lookup failed");
                None
            }
        }
    }

    pub async fn resolve_platform_role(&self, session: Option<&Session>) -> Option<PlatformRole> {
        self.lookup_platform_role(session?).await
    }

    pub async fn require_organization(
        &self,
        ctx: &RequestContext,
    ) -> ApplicationResult<OrganizationId> {
        self.resolve_organization(ctx)
            .await
            .ok_or_else(ApplicationError::no_tenant)
    }

    pub async fn require_platform_role(
        &self,
        session: Option<&Session>,
    ) -> ApplicationResult<PlatformRole> {
        self.resolve_platform_role(session)
            .await
            .ok_or_else(|| ApplicationError::forbidden("platform role required"))
    }

    /// Validates a platform user's request to switch tenants. The caller
    /// persists the result in the active-organization cookie.
    pub async fn select_organization(
        &self,
        ctx: &RequestContext,
        organization_id: &str,
    ) -> ApplicationResult<OrganizationId> {
        self.require_platform_role(ctx.session()).await?;
        let organization_id: OrganizationId = organization_id.parse()?;

        if !self.organizations.exists(organization_id).await? {
            return Err(ApplicationError::not_found("organization not found"));
        }
        Ok(organization_id)
    }

    async fn lookup_platform_role(&self, session: &Session) -> Option<PlatformRole> {
        match self.platform_roles.find_by_user(session.user_id).await {
            Ok(grant) => grant.map(|g| g.role),
            Err(err) => {
                warn!(user_id = %session.user_id, error = %err, "platform role lookup failed");
                None
            }
        }
    }

    async fn accept_selection(&self, selected: OrganizationId) -> Option<OrganizationId> {
        match self.selection_policy {
            OrganizationSelectionPolicy::Trusted => Some(selected),
            OrganizationSelectionPolicy::VerifyExists => {
                match self.organizations.exists(selected).await {
                    Ok(true) => Some(selected),
                    Ok(false) => {
                        warn!(organization_id = %selected, "selected organization does not exist");
                        None
                    }
                    Err(err) => {
                        warn!(organization_id = %selected, error = %err, "organization lookup failed");
                        None
                    }
                }
            }
        }
    }
}

/// A blank or malformed cookie counts as no selection.
fn selected_organization(raw: Option<&str>) -> Option<OrganizationId> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            debug!(cookie = raw, "ignoring malformed active organization selection");
            None
        }
    }
}
