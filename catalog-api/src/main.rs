use catalog_api::cli::Cli;
use catalog_api::config::Config;
use catalog_api::error::AppError;
use catalog_api::logging::init_logging;
use catalog_api::server::{create_app, AppState};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::load(&cli)?;

    // 初始化日志
    init_logging(&config.logging)?;

    tracing::info!("Starting catalog service");

    // 创建应用状态
    let app_state = AppState::in_memory(&config.store);
    let item_count = app_state.items.count_items().await?;

    // 创建并启动服务器
    let app = create_app(app_state, &config.server);
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", &addr);
    tracing::info!("Using in-memory storage with {} items", item_count);
    tracing::info!("Health check: http://localhost:{}/health", config.server.port);

    axum::serve(listener, app).await?;
    Ok(())
}
