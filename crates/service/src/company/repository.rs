use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{company, CompanyDraft, CompanyPatch};

use crate::errors::ServiceError;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, draft: CompanyDraft) -> Result<company::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError>;
    async fn list(&self, search: Option<&str>) -> Result<Vec<company::Model>, ServiceError>;
    async fn update(&self, id: i32, patch: CompanyPatch) -> Result<Option<company::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation. The connection is a pool; each
/// call checks a connection out for the duration of its query or transaction.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn create(&self, draft: CompanyDraft) -> Result<company::Model, ServiceError> {
        crate::db::company_service::create_company(&self.db, draft).await
    }

    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        crate::db::company_service::get_company(&self.db, id).await
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<company::Model>, ServiceError> {
        crate::db::company_service::list_companies(&self.db, search).await
    }

    async fn update(&self, id: i32, patch: CompanyPatch) -> Result<Option<company::Model>, ServiceError> {
        crate::db::company_service::update_company(&self.db, id, patch).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::company_service::delete_company(&self.db, id).await
    }
}
