//! Employee Context - 员工限界上下文
//!
//! 职责:
//! - 员工实体（唯一实体）
//! - 员工草稿（创建/更新请求的载荷）
//! - 搜索关键字

mod aggregate;
mod value_objects;

pub use aggregate::Employee;
pub use value_objects::{EmployeeDraft, EmployeeId, SearchTerm};
