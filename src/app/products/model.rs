//! 产品数据模型

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const NAME_REQUIRED: &str = "The Name field is required.";

/// 产品 ID，由存储在创建时分配
pub type ProductId = i64;

/// 产品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}

/// 创建、全量更新、部分更新共用的请求体
///
/// `id` 字段会被接受但不参与任何写入：新建时由存储分配，更新时以路径为准。
/// 只有创建和全量更新会调用 `validate()`，部分更新直接使用原始字段。
/// 字段名同时接受首字母大写的写法（`Name`、`Price`、`Id`）。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default, alias = "Id")]
    pub id: Option<ProductId>,
    #[validate(
        required(message = "The Name field is required."),
        custom(function = "not_blank", message = "The Name field is required.")
    )]
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Price")]
    pub price: Decimal,
}

/// 空串和纯空白都视为缺失
fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(NAME_REQUIRED));
        return Err(error);
    }
    Ok(())
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price,
        }
    }
}

/// 按名称过滤的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: Option<String>,
}
