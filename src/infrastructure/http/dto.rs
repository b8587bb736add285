//! Data Transfer Objects
//!
//! 线上 JSON 字段使用 camelCase，与前端约定一致

use serde::{Deserialize, Serialize};

use crate::domain::employee::{Employee, EmployeeDraft};

// ============================================================================
// Employee DTOs
// ============================================================================

/// 创建/更新员工请求体
///
/// 四个字段全部必填；请求中携带的 `employeeId` 会被忽略
#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft {
            name: req.name,
            age: req.age,
            department: req.department,
            position: req.position,
        }
    }
}

/// 员工响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee_id: i64,
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.id().value(),
            name: employee.name().to_string(),
            age: employee.age(),
            department: employee.department().to_string(),
            position: employee.position().to_string(),
        }
    }
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesParams {
    pub search: Option<String>,
}
