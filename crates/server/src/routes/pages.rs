use std::path::Path;

use axum::{extract::State, http::StatusCode, response::Html};
use tracing::error;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Entry form page.
pub async fn form(State(state): State<AppState>) -> Result<Html<String>, JsonApiError> {
    serve_page(&state.static_dir, "form.html").await
}

/// Dashboard page.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, JsonApiError> {
    serve_page(&state.static_dir, "dashboard.html").await
}

/// Read a page from disk on every request; a missing file is a 500, not a crash.
async fn serve_page(static_dir: &Path, page: &str) -> Result<Html<String>, JsonApiError> {
    let path = static_dir.join(page);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(path = %path.display(), error = %e, "static page unavailable");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Page Unavailable",
                Some(format!("{page} file not found ({})", path.display())),
            ))
        }
    }
}
