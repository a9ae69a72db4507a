//! 产品处理器

use axum::extract::State;

use super::model::{ListQuery, Product, ProductId, ProductPayload};
use super::service::ProductService;
use crate::common::{
    extract::{JsonBody, PathParam, QueryParam},
    ActionResult,
};

#[derive(Clone, Default)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

pub async fn list_products(State(state): State<AppState>) -> ActionResult<Vec<Product>> {
    state.product_service.list_all()
}

pub async fn get_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<ProductId>,
) -> ActionResult<Product> {
    state.product_service.get_by_id(id)
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ActionResult<Product> {
    state.product_service.create(payload)
}

pub async fn update_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<ProductId>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ActionResult<Product> {
    state.product_service.update(id, payload)
}

pub async fn patch_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<ProductId>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ActionResult<Product> {
    state.product_service.patch(id, payload)
}

pub async fn delete_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<ProductId>,
) -> ActionResult<()> {
    state.product_service.delete(id)
}

/// `name` 缺失时按空串处理，返回全部产品
pub async fn list_products_by_name(
    State(state): State<AppState>,
    QueryParam(query): QueryParam<ListQuery>,
) -> ActionResult<Vec<Product>> {
    state
        .product_service
        .list_by_name(query.name.as_deref().unwrap_or_default())
}
