use models::errors::{FieldError, ModelError};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("export error: {0}")]
    Export(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(", ")
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        let ModelError::Validation(errors) = e;
        Self::Validation(errors)
    }
}

/// Unique-constraint violations become `Conflict`; everything else is a plain store failure.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_keeps_field_list() {
        let e: ServiceError = ModelError::Validation(vec![FieldError::new("isin_no", "too short")]).into();
        match e {
            ServiceError::Validation(errors) => assert_eq!(errors[0].field, "isin_no"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn plain_db_error_is_not_conflict() {
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }
}
