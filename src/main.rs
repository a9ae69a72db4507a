use product_catalog::infrastructure::{config::load_config, logger::Logger};
use product_catalog::{build_router, AppState, ProductService, ProductStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    config.validate()?;

    let _log_guard = Logger::init(&config.logging)?;

    match source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }
    info!("启动产品目录服务...");

    let store = ProductStore::with_id_assignment(config.store.id_assignment);
    info!("ID 分配策略: {:?}", store.id_assignment());
    let state = AppState::new(ProductService::new(store));
    let app = build_router(state, &config.http);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/products                       - 获取所有产品");
    info!("   GET    /api/products/GetProductById/:id    - 获取特定产品");
    info!("   POST   /api/products/create                - 创建产品");
    info!("   PUT    /api/products/UpdateProductById/:id - 全量更新产品");
    info!("   PATCH  /api/products/:id                   - 部分更新产品");
    info!("   DELETE /api/products/:id                   - 删除产品");
    info!("   GET    /api/products/list?name=            - 按名称过滤");
    info!("   GET    /health                             - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("监听退出信号失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭...");
}
