// src/presentation/http/controllers/platform_roles.rs
use crate::application::{
    commands::platform_roles::{GrantPlatformRoleCommand, RevokePlatformRoleCommand},
    dto::PlatformRoleGrantDto,
};
use crate::domain::tenant::PlatformRole;
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::Context,
    state::HttpState,
};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GrantRoleRequest {
    pub role: PlatformRole,
}

pub async fn list_roles(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
) -> HttpResult<Json<Vec<PlatformRoleGrantDto>>> {
    let roles = state
        .services
        .platform_role_queries
        .list_roles(&ctx)
        .await
        .into_http()?;
    Ok(Json(roles))
}

pub async fn grant_role(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<GrantRoleRequest>,
) -> HttpResult<Json<PlatformRoleGrantDto>> {
    let grant = state
        .services
        .platform_role_commands
        .grant_role(
            &ctx,
            GrantPlatformRoleCommand {
                user_id,
                role: payload.role,
            },
        )
        .await
        .into_http()?;
    Ok(Json(grant))
}

pub async fn revoke_role(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Path(user_id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .platform_role_commands
        .revoke_role(&ctx, RevokePlatformRoleCommand { user_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
