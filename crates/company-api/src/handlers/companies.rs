//! Company handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use company_models::CompanyId;
use company_store::Page;

use crate::error::Result;
use crate::state::AppState;
use crate::types::{CompanyListQuery, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};

/// GET /api/companies - List companies, optionally one page at a time.
pub async fn list_companies(
    State(state): State<AppState>,
    query: std::result::Result<Query<CompanyListQuery>, QueryRejection>,
) -> Result<Json<Vec<CompanyResponse>>> {
    let Query(query) = query?;
    let page = Page::from_optional(query.page_size, query.page_index)?;

    let companies = state.store.list_paged(page);
    Ok(Json(companies.iter().map(CompanyResponse::from).collect()))
}

/// POST /api/companies - Create a new company.
pub async fn create_company(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>)> {
    let Json(req) = payload?;
    let company = state.store.create(req.name)?;
    info!(company_id = %company.id, name = %company.name, "Company created");

    Ok((StatusCode::CREATED, Json(CompanyResponse::from(&company))))
}

/// GET /api/companies/:id - Get a company by ID.
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanyResponse>> {
    let company = state.store.get(&CompanyId::from_string(id))?;
    Ok(Json(CompanyResponse::from(&company)))
}

/// PUT /api/companies/:id - Rename a company.
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateCompanyRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(req) = payload?;
    let company = state.store.update(&CompanyId::from_string(id), req.name)?;
    info!(company_id = %company.id, name = %company.name, "Company renamed");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/companies - Remove every company.
pub async fn clear_companies(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    info!("All companies cleared");
    StatusCode::NO_CONTENT
}
