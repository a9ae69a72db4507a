//! 核心错误处理模块

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use super::response::{ActionResult, ErrorDetail};

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 请求无法解析（非法 JSON、非整数路径参数、重复的查询参数等）
    #[error("{0}")]
    BadRequest(String),
    #[error("One or more validation errors occurred.")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(String),
}

impl CoreError {
    pub fn product_not_found(id: i64) -> Self {
        CoreError::NotFound(format!("Product with Id {} not found.", id))
    }
}

/// 字段名 -> 错误信息列表
fn field_messages(errors: &ValidationErrors) -> serde_json::Value {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    serde_json::json!(fields)
}

impl<T> From<CoreError> for ActionResult<T> {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::BadRequest(_) => ActionResult::BadRequest(ErrorDetail::new(message)),
            CoreError::Validation(errors) => ActionResult::BadRequest(ErrorDetail::with_details(
                message,
                field_messages(&errors),
            )),
            CoreError::NotFound(_) => ActionResult::NotFound(ErrorDetail::new(message)),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        ActionResult::<()>::from(self).into_response()
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::products::model::ProductPayload;
    use validator::Validate;

    #[test]
    fn test_not_found_message_names_id() {
        let result = ActionResult::<()>::from(CoreError::product_not_found(7));
        assert_eq!(
            result,
            ActionResult::NotFound(ErrorDetail::new("Product with Id 7 not found."))
        );
    }

    #[test]
    fn test_validation_error_carries_field_detail() {
        let errors = ProductPayload::default().validate().unwrap_err();
        let result = ActionResult::<()>::from(CoreError::from(errors));

        match result {
            ActionResult::BadRequest(detail) => {
                let details = detail.details.expect("field details");
                assert_eq!(details["name"][0], "The Name field is required.");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
