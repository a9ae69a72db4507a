//! 产品管理

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use handler::AppState;

/// 产品路由，静态段（`list`、`create`）优先于 `:id` 匹配
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(handler::list_products))
        .route("/api/products/list", get(handler::list_products_by_name))
        .route("/api/products/create", post(handler::create_product))
        .route(
            "/api/products/GetProductById/:id",
            get(handler::get_product),
        )
        .route(
            "/api/products/UpdateProductById/:id",
            put(handler::update_product),
        )
        .route(
            "/api/products/:id",
            delete(handler::delete_product).patch(handler::patch_product),
        )
}
