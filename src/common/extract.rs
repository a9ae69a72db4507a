//! 自定义提取器
//!
//! 包装 axum 自带的 `Json`、`Path` 和 `Query`，把提取失败统一转成 `CoreError`，
//! 使非法请求体、路径参数和查询参数也返回统一的错误结构。

use axum::extract::{FromRequest, FromRequestParts};

use super::error::CoreError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct PathParam<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(CoreError))]
pub struct QueryParam<T>(pub T);
