//! Employee Context - Entity

use super::{EmployeeDraft, EmployeeId};

/// 员工实体
///
/// 不变量:
/// - `id` 仅在首次持久化时分配一次
/// - 更新时四个可变字段同时被覆盖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    age: i32,
    department: String,
    position: String,
}

impl Employee {
    /// 由已分配的 ID 和草稿数据组装实体
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            department: draft.department,
            position: draft.position,
        }
    }

    /// 用草稿整体覆盖可变字段，ID 保持不变
    pub fn overwrite(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.department = draft.department;
        self.position = draft.position;
    }

    // Getters
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}
