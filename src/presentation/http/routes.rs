// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{audit, companies, platform_roles, tenant},
    middleware::rate_limit::rate_limit_layer,
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let mut api = Router::new()
        .route(
            "/api/v1/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/api/v1/companies/{id}",
            get(companies::get_company)
                .patch(companies::update_company)
                .delete(companies::delete_company),
        )
        .route("/api/v1/audit-logs", get(audit::list_audit_logs))
        .route("/api/v1/tenant", get(tenant::current_tenant))
        .route(
            "/api/v1/tenant/active-organization",
            put(tenant::select_organization).delete(tenant::clear_organization),
        )
        .route("/api/v1/platform/roles", get(platform_roles::list_roles))
        .route(
            "/api/v1/platform/roles/{user_id}",
            put(platform_roles::grant_role).delete(platform_roles::revoke_role),
        );

    if rate_limit {
        match rate_limit_layer() {
            Some(layer) => api = api.layer(layer),
            None => warn!("rate limiter configuration rejected; serving without it"),
        }
    }

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, HeaderName::from_static("x-request-id")])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
