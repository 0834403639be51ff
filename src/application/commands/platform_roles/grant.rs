use super::PlatformRoleCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::PlatformRoleGrantDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tenant::{NewPlatformRoleGrant, PlatformRole, UserId},
};
use tracing::info;
use uuid::Uuid;

pub struct GrantPlatformRoleCommand {
    pub user_id: Uuid,
    pub role: PlatformRole,
}

impl PlatformRoleCommandService {
    pub async fn grant_role(
        &self,
        ctx: &RequestContext,
        command: GrantPlatformRoleCommand,
    ) -> ApplicationResult<PlatformRoleGrantDto> {
        let actor = self.ensure_role_manager(ctx).await?;
        let user_id = UserId::new(command.user_id)?;

        if user_id == actor.user_id && command.role != PlatformRole::PlatformOwner {
            return Err(ApplicationError::conflict(
                "platform owners cannot demote themselves",
            ));
        }

        if self.profiles.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let grant = self
            .roles
            .upsert(NewPlatformRoleGrant {
                user_id,
                role: command.role,
                granted_by: Some(actor.user_id),
                created_at: self.clock.now(),
            })
            .await?;

        info!(
            user_id = %user_id,
            role = %command.role,
            granted_by = %actor.user_id,
            "platform role granted"
        );
        Ok(grant.into())
    }
}
