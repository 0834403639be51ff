// src/presentation/http/controllers/audit.rs
use crate::application::dto::{AuditLogDto, CursorPage};
use crate::application::queries::audit::ListAuditLogsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Context;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use uuid::Uuid;

#[derive(Debug, serde::Deserialize)]
pub struct ListAuditParams {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<Uuid>,
}

pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Query(params): Query<ListAuditParams>,
) -> HttpResult<Json<CursorPage<AuditLogDto>>> {
    let page = state
        .services
        .audit_queries
        .list_audit_logs(
            &ctx,
            ListAuditLogsQuery {
                limit: params.limit,
                cursor: params.cursor,
                entity_type: params.entity_type,
                entity_id: params.entity_id,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}
