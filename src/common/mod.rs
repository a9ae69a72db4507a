//! 核心层：错误、响应、提取器与中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;

pub use error::CoreError;
pub use response::{ActionResult, ErrorDetail};
