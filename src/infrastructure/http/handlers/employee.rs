//! Employee HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateEmployee, DeleteEmployee, GetEmployee, ListEmployees, UpdateEmployee};
use crate::domain::employee::EmployeeId;
use crate::infrastructure::http::dto::{EmployeeRequest, EmployeeResponse, ListEmployeesParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 删除成功时返回的纯文本
pub const DELETE_CONFIRMATION: &str = "Employee deleted successfully";

/// 创建员工
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let Json(req) = payload?;

    let command = CreateEmployee { draft: req.into() };
    let employee = state.create_employee_handler.handle(command).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// 获取员工列表，`search` 按姓名或职位过滤
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let Query(params) = query?;

    let query = ListEmployees {
        search: params.search,
    };
    let employees = state.list_employees_handler.handle(query).await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// 获取员工详情
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let Path(id) = path?;

    let query = GetEmployee {
        employee_id: EmployeeId::new(id),
    };
    let employee = state.get_employee_handler.handle(query).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// 整体更新员工
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;

    let command = UpdateEmployee {
        employee_id: EmployeeId::new(id),
        draft: req.into(),
    };
    let employee = state.update_employee_handler.handle(command).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// 删除员工
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;

    let command = DeleteEmployee {
        employee_id: EmployeeId::new(id),
    };
    state.delete_employee_handler.handle(command).await?;

    Ok(DELETE_CONFIRMATION)
}
