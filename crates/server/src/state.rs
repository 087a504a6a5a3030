use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;
use service::company::{CompanyService, SeaOrmCompanyRepository};

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService<SeaOrmCompanyRepository>>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, static_dir: impl Into<PathBuf>) -> Self {
        let repo = Arc::new(SeaOrmCompanyRepository::new(db));
        Self {
            companies: Arc::new(CompanyService::new(repo)),
            static_dir: static_dir.into(),
        }
    }
}
