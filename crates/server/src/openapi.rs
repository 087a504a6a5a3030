use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Create/update payload. On update every field is optional.
#[derive(ToSchema)]
pub struct CompanyInputDoc {
    pub company_name: String,
    /// Exactly 12 characters, unique.
    pub isin_no: String,
    pub paid_up_capital: Option<String>,
    pub face_value: Option<f64>,
    pub no_of_shares: Option<i64>,
    pub shareholders_demat: Option<String>,
    pub shareholders_physical: Option<String>,
    pub contact_person: Option<String>,
    pub designation: Option<String>,
    pub company_address: Option<String>,
    pub cin: Option<String>,
    /// Exactly 10 digits.
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
    pub company_type: Option<String>,
    pub listing_status: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i32,
    pub company_name: String,
    pub isin_no: String,
    pub paid_up_capital: Option<String>,
    pub face_value: Option<f64>,
    pub no_of_shares: Option<i64>,
    pub shareholders_demat: Option<String>,
    pub shareholders_physical: Option<String>,
    pub contact_person: Option<String>,
    pub designation: Option<String>,
    pub company_address: Option<String>,
    pub cin: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub gstin: Option<String>,
    pub company_type: Option<String>,
    pub listing_status: Option<String>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct ConfirmationDoc { pub ok: bool }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::create,
        crate::routes::companies::list,
        crate::routes::companies::export,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyInputDoc,
            CompanyDoc,
            ConfirmationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "company")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
