//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::employee::{Employee, EmployeeDraft, EmployeeId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Employee Repository
// ============================================================================

/// Employee Repository Port
#[async_trait]
pub trait EmployeeRepositoryPort: Send + Sync {
    /// 插入新员工，由存储引擎分配 ID
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, RepositoryError>;

    /// 根据 ID 查找员工
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// 获取所有员工（按 ID 升序）
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// 查找姓名或职位包含指定子串的员工
    async fn find_by_name_or_position_containing(
        &self,
        term: &str,
    ) -> Result<Vec<Employee>, RepositoryError>;

    /// 按 ID 覆盖员工数据
    ///
    /// 返回 `false` 表示该 ID 不存在
    async fn update(&self, employee: &Employee) -> Result<bool, RepositoryError>;

    /// 按 ID 删除员工
    ///
    /// 返回 `false` 表示该 ID 不存在
    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError>;
}
