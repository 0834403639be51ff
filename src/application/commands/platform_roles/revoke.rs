use super::PlatformRoleCommandService;
use crate::{
    application::{
        context::RequestContext,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tenant::UserId,
};
use tracing::info;
use uuid::Uuid;

pub struct RevokePlatformRoleCommand {
    pub user_id: Uuid,
}

impl PlatformRoleCommandService {
    pub async fn revoke_role(
        &self,
        ctx: &RequestContext,
        command: RevokePlatformRoleCommand,
    ) -> ApplicationResult<()> {
        let actor = self.ensure_role_manager(ctx).await?;
        let user_id = UserId::new(command.user_id)?;

        if user_id == actor.user_id {
            return Err(ApplicationError::conflict(
                "platform owners cannot revoke their own role",
            ));
        }

        self.roles.delete(user_id).await?;
        info!(user_id = %user_id, revoked_by = %actor.user_id, "platform role revoked");
        Ok(())
    }
}
