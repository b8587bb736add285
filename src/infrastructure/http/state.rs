//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateEmployeeHandler, DeleteEmployeeHandler, UpdateEmployeeHandler,
    // Query handlers
    GetEmployeeHandler, ListEmployeesHandler,
    // Ports
    EmployeeRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_employee_handler: CreateEmployeeHandler,
    pub update_employee_handler: UpdateEmployeeHandler,
    pub delete_employee_handler: DeleteEmployeeHandler,

    // ========== Query Handlers ==========
    pub get_employee_handler: GetEmployeeHandler,
    pub list_employees_handler: ListEmployeesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self {
            // Command handlers
            create_employee_handler: CreateEmployeeHandler::new(employee_repo.clone()),
            update_employee_handler: UpdateEmployeeHandler::new(employee_repo.clone()),
            delete_employee_handler: DeleteEmployeeHandler::new(employee_repo.clone()),

            // Query handlers
            get_employee_handler: GetEmployeeHandler::new(employee_repo.clone()),
            list_employees_handler: ListEmployeesHandler::new(employee_repo),
        }
    }
}
