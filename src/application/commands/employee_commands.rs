//! Employee Commands

use crate::domain::employee::{EmployeeDraft, EmployeeId};

/// 创建员工命令
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub draft: EmployeeDraft,
}

/// 整体更新员工命令
#[derive(Debug, Clone)]
pub struct UpdateEmployee {
    pub employee_id: EmployeeId,
    pub draft: EmployeeDraft,
}

/// 删除员工命令
#[derive(Debug, Clone)]
pub struct DeleteEmployee {
    pub employee_id: EmployeeId,
}
