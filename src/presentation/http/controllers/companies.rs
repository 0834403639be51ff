// src/presentation/http/controllers/companies.rs
use crate::application::{
    commands::companies::{CreateCompanyCommand, DeleteCompanyCommand, UpdateCompanyCommand},
    dto::{CompanyDto, Page},
    queries::companies::{GetCompanyQuery, ListCompaniesQuery},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::Context,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListCompaniesParams {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default, alias = "search")]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub employee_count: Option<i32>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Absent fields stay untouched; explicit `null` clears nullable ones.
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub domain: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub industry: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub employee_count: Option<Option<i32>>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub async fn list_companies(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Query(params): Query<ListCompaniesParams>,
) -> HttpResult<Json<Page<CompanyDto>>> {
    let page = state
        .services
        .company_queries
        .list_companies(
            &ctx,
            ListCompaniesQuery {
                limit: params.limit,
                offset: params.offset,
                search: params.q,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn create_company(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Json(payload): Json<CreateCompanyRequest>,
) -> HttpResult<(StatusCode, Json<CompanyDto>)> {
    let company = state
        .services
        .company_commands
        .create_company(
            &ctx,
            CreateCompanyCommand {
                name: payload.name,
                domain: payload.domain,
                industry: payload.industry,
                employee_count: payload.employee_count,
                metadata: payload.metadata,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn get_company(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<CompanyDto>> {
    let company = state
        .services
        .company_queries
        .get_company(&ctx, GetCompanyQuery { id })
        .await
        .into_http()?;
    Ok(Json(company))
}

pub async fn update_company(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> HttpResult<Json<CompanyDto>> {
    let company = state
        .services
        .company_commands
        .update_company(
            &ctx,
            UpdateCompanyCommand {
                id,
                name: payload.name,
                domain: payload.domain,
                industry: payload.industry,
                employee_count: payload.employee_count,
                metadata: payload.metadata,
            },
        )
        .await
        .into_http()?;
    Ok(Json(company))
}

pub async fn delete_company(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .company_commands
        .delete_company(&ctx, DeleteCompanyCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
