//! Employee Management - 员工档案 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Employee Context: 员工实体、草稿、搜索关键字
//!
//! 应用层 (application/):
//! - Ports: EmployeeRepositoryPort
//! - Commands: 创建、更新、删除
//! - Queries: 详情、列表/搜索
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（/api/employees）
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{load_config, AppConfig};
