use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use service::errors::ServiceError;
use tracing::{error, warn};

pub const CONFLICT_DETAIL: &str = "ISIN already exists or DB constraint error";
pub const DB_FAILURE_DETAIL: &str = "Database operation failed";
pub const EXPORT_FAILURE_DETAIL: &str = "Could not build the export file";

/// JSON error body: `{"error": <title>, "detail": <string | field list | null>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<Value>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail: detail.map(Value::String) }
    }

    pub fn with_detail(status: StatusCode, error: &'static str, detail: Value) -> Self {
        Self { status, error, detail: Some(detail) }
    }

    /// Unreadable request body, reported like a field violation on `body`.
    pub fn invalid_body(message: &str) -> Self {
        Self::with_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Error",
            json!([{ "field": "body", "message": message }]),
        )
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::invalid_body(&rej.body_text())
    }
}

/// Id segment that is not an `i32`, reported as a violation on `id`.
impl From<PathRejection> for JsonApiError {
    fn from(rej: PathRejection) -> Self {
        Self::with_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Error",
            json!([{ "field": "id", "message": rej.body_text() }]),
        )
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(fields) => {
                Self::with_detail(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", json!(fields))
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Conflict(msg) => {
                warn!(constraint = %msg, "constraint violation");
                Self::new(StatusCode::BAD_REQUEST, "Conflict", Some(CONFLICT_DETAIL.to_string()))
            }
            ServiceError::Db(msg) => {
                error!(err = %msg, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(DB_FAILURE_DETAIL.to_string()))
            }
            ServiceError::Export(msg) => {
                error!(err = %msg, "export failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Export Failed", Some(EXPORT_FAILURE_DETAIL.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.error, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::FieldError;

    #[test]
    fn status_codes() {
        let v: JsonApiError = ServiceError::Validation(vec![FieldError::new("email", "bad")]).into();
        assert_eq!(v.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(v.detail, Some(json!([{ "field": "email", "message": "bad" }])));

        let c: JsonApiError = ServiceError::Conflict("uniq_company_isin_no".into()).into();
        assert_eq!(c.status, StatusCode::BAD_REQUEST);

        let n: JsonApiError = ServiceError::not_found("company").into();
        assert_eq!(n.status, StatusCode::NOT_FOUND);

        let d: JsonApiError = ServiceError::Db("pool timed out".into()).into();
        assert_eq!(d.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn server_failures_hide_internal_messages() {
        let d: JsonApiError = ServiceError::Db("no such table: company_details".into()).into();
        assert_eq!(d.detail, Some(json!(DB_FAILURE_DETAIL)));

        let x: JsonApiError = ServiceError::Export("worksheet name invalid".into()).into();
        assert_eq!(x.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(x.detail, Some(json!(EXPORT_FAILURE_DETAIL)));
    }
}
