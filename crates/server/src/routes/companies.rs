use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use common::types::Confirmation;
use models::company;
use service::export;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against ISIN or company name.
    pub search: Option<String>,
}

fn path_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    let Path(id) = id?;
    Ok(id)
}

fn object_body(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, JsonApiError> {
    let Json(value) = body?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(JsonApiError::invalid_body("expected a JSON object")),
    }
}

#[utoipa::path(
    post, path = "/company", tag = "company",
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 400, description = "ISIN already exists"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<company::Model>, JsonApiError> {
    let input = object_body(body)?;
    let created = state.companies.create(&input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/company", tag = "company",
    params(SearchQuery),
    responses(
        (status = 200, description = "Newest first", body = [crate::openapi::CompanyDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<company::Model>>, JsonApiError> {
    let rows = state.companies.list(q.search.as_deref()).await?;
    info!(count = rows.len(), "list companies");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/company/export", tag = "company",
    params(SearchQuery),
    responses(
        (status = 200, description = "Spreadsheet attachment (.xlsx)"),
        (status = 404, description = "No data to export")
    )
)]
pub async fn export(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<impl IntoResponse, JsonApiError> {
    let bytes = state.companies.export(q.search.as_deref()).await?;
    let disposition = format!("attachment; filename={}", export::FILE_NAME);
    Ok((
        [
            (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

#[utoipa::path(
    get, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Id is not an integer")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<company::Model>, JsonApiError> {
    let found = state.companies.get(path_id(id)?).await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company id")),
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 400, description = "ISIN already exists"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<company::Model>, JsonApiError> {
    let id = path_id(id)?;
    let input = object_body(body)?;
    let updated = state.companies.update(id, &input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::ConfirmationDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Id is not an integer")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Confirmation>, JsonApiError> {
    state.companies.delete(path_id(id)?).await?;
    Ok(Json(Confirmation::ok()))
}
