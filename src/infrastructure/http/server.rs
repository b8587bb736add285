//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid CORS origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 唯一允许跨域访问的来源
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, allowed_origin: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            allowed_origin: allowed_origin.into(),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建 CORS 层，只放行一个来源
fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let origin = HeaderValue::from_str(origin).map_err(|e| ServerError::InvalidOrigin {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
    cors: CorsLayer,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self, ServerError> {
        let cors = cors_layer(&config.allowed_origin)?;
        Ok(Self {
            config,
            state: Arc::new(state),
            cors,
        })
    }

    /// 构建 Router
    pub fn router(&self) -> Router {
        create_routes()
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors.clone())
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), ServerError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let addr = self.config.addr();

        info!(
            addr = %addr,
            allowed_origin = %self.config.allowed_origin,
            "Starting HTTP server (with graceful shutdown)"
        );

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::new("127.0.0.1", 9090, "http://localhost:5173");
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result = cors_layer("http://bad\norigin");
        assert!(matches!(result, Err(ServerError::InvalidOrigin { .. })));
    }

    #[test]
    fn test_valid_origin_accepted() {
        assert!(cors_layer("http://localhost:5173").is_ok());
    }
}
