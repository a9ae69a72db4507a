//! 应用层

pub mod products;

use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::common::middleware::request_logging_middleware;
use crate::infrastructure::config::HttpConfig;
use products::handler::AppState;

/// 组装完整的路由和中间件栈
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::LOCATION]);

    Router::new()
        .route("/health", get(health_check))
        .merge(products::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(cors)
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds))),
        )
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "store": {
            "type": "in-memory",
            "products_count": state.product_service.count()
        }
    }))
}
