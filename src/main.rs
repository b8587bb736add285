//! Employee Management - 员工档案 CRUD 服务
//!
//! 启动顺序: 配置 → 日志 → 数据库 → Repository → AppState → HTTP 服务器

use std::sync::Arc;

use employee_management::config::print_config;
use employee_management::infrastructure::http::{AppState, HttpServer, ServerConfig};
use employee_management::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteEmployeeRepository,
};
use employee_management::{load_config, AppConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},employee_management={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Employee Management Service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.path, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let employee_repo = Arc::new(SqliteEmployeeRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.server.allowed_origin,
    );
    let state = AppState::new(employee_repo);
    let server = HttpServer::new(server_config, state)?;

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
