// src/presentation/http/controllers/tenant.rs
use crate::application::{dto::TenantDto, error::ApplicationError};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::Context,
    state::HttpState,
};
use axum::{
    Extension, Json,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SelectOrganizationRequest {
    pub organization_id: String,
}

#[derive(Debug, Serialize)]
pub struct SelectOrganizationResponse {
    pub organization_id: Uuid,
}

fn cookie_header(value: Option<HeaderValue>) -> HttpResult<HeaderValue> {
    value.ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "active organization cookie name is not a valid header value",
        ))
    })
}

pub async fn current_tenant(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
) -> HttpResult<Json<TenantDto>> {
    let tenant = state.services.tenant.current_tenant(&ctx).await.into_http()?;
    Ok(Json(tenant))
}

pub async fn select_organization(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Json(payload): Json<SelectOrganizationRequest>,
) -> HttpResult<impl IntoResponse> {
    let organization_id = state
        .services
        .tenant
        .select_organization(&ctx, &payload.organization_id)
        .await
        .into_http()?;
    let cookie = cookie_header(state.cookie.set(organization_id))?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(SelectOrganizationResponse {
            organization_id: organization_id.into(),
        }),
    ))
}

pub async fn clear_organization(
    Extension(state): Extension<HttpState>,
) -> HttpResult<impl IntoResponse> {
    let cookie = cookie_header(state.cookie.clear())?;
    Ok((StatusCode::NO_CONTENT, AppendHeaders([(SET_COOKIE, cookie)])))
}
