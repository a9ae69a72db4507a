//! # 产品目录 REST 服务
//!
//! 基于 Axum 的内存产品管理服务，分层结构：
//! - `app`：路由、处理器、业务服务和内存存储
//! - `common`：统一错误、响应映射、提取器、中间件
//! - `infrastructure`：配置加载、日志初始化

pub mod app;
pub mod common;
pub mod infrastructure;

pub use app::build_router;
pub use app::products::{
    handler::AppState,
    model::{Product, ProductId, ProductPayload},
    service::ProductService,
    store::{IdAssignment, ProductStore},
};
pub use common::{ActionResult, CoreError};
pub use infrastructure::config::{Config, ConfigError};
