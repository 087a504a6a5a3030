use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, instrument};

use models::{company, CompanyDraft, CompanyPatch};

use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::export;

/// Application service for company records.
/// Validates raw input, then hands typed drafts and patches to the repository.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &Map<String, Value>) -> Result<company::Model, ServiceError> {
        let draft = CompanyDraft::from_json(input)?;
        self.repo.create(draft).await
    }

    pub async fn get(&self, id: i32) -> Result<company::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("company"))
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<company::Model>, ServiceError> {
        self.repo.list(search).await
    }

    /// Validation runs before the lookup, so a bad patch is rejected even for unknown ids.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: &Map<String, Value>) -> Result<company::Model, ServiceError> {
        let patch = CompanyPatch::from_json(input)?;
        self.repo.update(id, patch).await?.ok_or_else(|| ServiceError::not_found("company"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("company"))
        }
    }

    /// Spreadsheet of the same rows `list` would return.
    #[instrument(skip(self))]
    pub async fn export(&self, search: Option<&str>) -> Result<Vec<u8>, ServiceError> {
        let rows = self.repo.list(search).await?;
        let bytes = export::export_companies(&rows)?;
        info!(count = rows.len(), size = bytes.len(), "companies exported");
        Ok(bytes)
    }
}
