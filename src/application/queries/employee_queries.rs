//! Employee Queries

use crate::domain::employee::EmployeeId;

/// 获取员工详情查询
#[derive(Debug, Clone)]
pub struct GetEmployee {
    pub employee_id: EmployeeId,
}

/// 列出员工查询
///
/// `search` 为空或缺省时返回全部员工
#[derive(Debug, Clone, Default)]
pub struct ListEmployees {
    pub search: Option<String>,
}
