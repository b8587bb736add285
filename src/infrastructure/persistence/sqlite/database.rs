//! SQLite Database - 数据库连接和迁移

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// 数据库位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// 磁盘文件，路径原样交给 SQLite，不经过 URL 解析
    File(PathBuf),
    /// 内存数据库
    Memory,
}

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库位置
    pub location: DatabaseLocation,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            location: DatabaseLocation::File(path.into()),
            max_connections,
        }
    }

    /// 内存数据库（测试用）
    ///
    /// 每个连接各自持有一个独立的内存库，因此只允许一个连接
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            max_connections: 1,
        }
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        let options = match &self.location {
            DatabaseLocation::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
            DatabaseLocation::Memory => SqliteConnectOptions::from_str("sqlite::memory:")?,
        };

        Ok(options
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_millis(5000))
            .synchronous(SqliteSynchronous::Normal))
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// WAL、busy_timeout 和 synchronous 通过连接选项设置，对池中每个连接生效
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        location = ?config.location,
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT 保证被删除的 ID 不会被重新分配
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            department TEXT NOT NULL,
            position TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
