pub mod companies;
pub mod pages;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Alive", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: pages, static assets, company API and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    let pages = Router::new()
        .route("/", get(pages::form))
        .route("/dashboard", get(pages::dashboard))
        .nest_service("/static", static_files);

    // /company/export 为静态段，优先于 /company/:id 匹配
    let api = Router::new()
        .route("/company", get(companies::list).post(companies::create))
        .route("/company/export", get(companies::export))
        .route(
            "/company/:id",
            get(companies::get).put(companies::update).delete(companies::delete),
        );

    let meta = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    pages
        .merge(api)
        .merge(meta)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
