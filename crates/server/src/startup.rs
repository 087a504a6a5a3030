use std::{future::Future, path::PathBuf};

use axum::Router;
use configs::AppConfig;
use models::db::{connect_and_migrate, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router around an existing state.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Connect, migrate, bind and serve until `shutdown` resolves.
pub async fn run(cfg: AppConfig, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
    let static_dir = PathBuf::from(&cfg.assets.static_dir);
    let missing = common::env::ensure_static_dir(&static_dir).await?;
    if !missing.is_empty() {
        warn!(?missing, "some pages will answer with a server error");
    }

    // 每个请求从连接池获取连接，处理完毕后归还
    let db = connect_and_migrate(&DatabaseConfig::from(&cfg.database)).await?;
    let state = AppState::new(db, static_dir);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting isin registry server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}
