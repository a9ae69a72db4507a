//! 核心响应处理模块
//!
//! `ActionResult` 是处理器的统一返回值，由 `IntoResponse` 在边界处
//! 映射为状态码、响应头和 JSON 响应体。

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 错误详情，`details` 携带字段级校验信息
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            details: Some(details),
        }
    }
}

/// 处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// 200
    Ok(T),
    /// 201，第二个字段为可重新获取该资源的地址
    Created(T, String),
    /// 400
    BadRequest(ErrorDetail),
    /// 404
    NotFound(ErrorDetail),
    /// 204
    NoContent,
}

impl<T> ActionResult<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            ActionResult::Ok(_) => StatusCode::OK,
            ActionResult::Created(..) => StatusCode::CREATED,
            ActionResult::BadRequest(_) => StatusCode::BAD_REQUEST,
            ActionResult::NotFound(_) => StatusCode::NOT_FOUND,
            ActionResult::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, error: &str, detail: ErrorDetail) -> Self {
        Self {
            error: error.to_string(),
            message: detail.message,
            code: status.as_u16(),
            details: detail.details,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ActionResult::Ok(body) => (status, Json(body)).into_response(),
            ActionResult::Created(body, location) => {
                (status, [(header::LOCATION, location)], Json(body)).into_response()
            }
            ActionResult::BadRequest(detail) => {
                (status, Json(ErrorResponse::new(status, "BAD_REQUEST", detail))).into_response()
            }
            ActionResult::NotFound(detail) => {
                (status, Json(ErrorResponse::new(status, "NOT_FOUND", detail))).into_response()
            }
            ActionResult::NoContent => status.into_response(),
        }
    }
}
