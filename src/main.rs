use axum::{
    routing::{get, post},
    Router,
};
use perf_settle_rust::api::{self, AppState};
use perf_settle_rust::{AppConfig, SettlementService};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    let state = AppState {
        service: Arc::new(SettlementService::new(config.settlement.cap.clone())),
        export_dir: PathBuf::from(&config.settlement.export_dir),
    };

    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/extract", post(api::extract))
        .route("/api/settle", post(api::settle))
        .route("/api/settle/export", post(api::settle_export))
        .with_state(state)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/extract        - 绩效表抽取 (明细 + 异常)");
    info!("  POST /api/settle         - 抽取 + 汇总 + 封顶分配");
    info!("  POST /api/settle/export  - 结算并导出 CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
