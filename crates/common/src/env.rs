//! Environment/runtime helpers
//!
//! Sanity checks on the static asset directory at startup.

use std::path::Path;

use tracing::warn;

/// Pages the router serves straight from the static directory.
pub const STATIC_PAGES: [&str; 2] = ["form.html", "dashboard.html"];

/// Warn about a missing static directory or page; the server still starts and
/// answers those routes with a server error.
///
/// Returns the names of the pages that were not found.
pub async fn ensure_static_dir(static_dir: &Path) -> anyhow::Result<Vec<&'static str>> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(static_dir = %static_dir.display(), "static directory not found; page routes will fail");
        return Ok(STATIC_PAGES.to_vec());
    }
    let mut missing = Vec::new();
    for page in STATIC_PAGES {
        if tokio::fs::metadata(static_dir.join(page)).await.is_err() {
            warn!(static_dir = %static_dir.display(), page, "static page missing");
            missing.push(page);
        }
    }
    Ok(missing)
}
