//! Employee Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::EmployeeRepositoryPort;
use crate::application::queries::{GetEmployee, ListEmployees};
use crate::domain::employee::{Employee, SearchTerm};

/// GetEmployee Handler
pub struct GetEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl GetEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, query: GetEmployee) -> Result<Employee, ApplicationError> {
        self.employee_repo
            .find_by_id(query.employee_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Employee", query.employee_id))
    }
}

/// ListEmployees Handler
///
/// 无关键字时列出全部，否则按姓名或职位做子串匹配
pub struct ListEmployeesHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl ListEmployeesHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, query: ListEmployees) -> Result<Vec<Employee>, ApplicationError> {
        let employees = match SearchTerm::parse(query.search) {
            Some(term) => {
                tracing::debug!(term = %term, "Searching employees by name or position");
                self.employee_repo
                    .find_by_name_or_position_containing(term.as_str())
                    .await?
            }
            None => self.employee_repo.find_all().await?,
        };

        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{EmployeeDraft, EmployeeId};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteEmployeeRepository,
    };

    async fn seeded_repo() -> Arc<dyn EmployeeRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteEmployeeRepository::new(pool));

        for draft in [
            EmployeeDraft::new("Ann", 30, "Eng", "Dev"),
            EmployeeDraft::new("Bob", 45, "Ops", "Manager"),
            EmployeeDraft::new("Carl", 28, "Eng", "DevOps"),
        ] {
            repo.insert(&draft).await.unwrap();
        }

        repo
    }

    fn names(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.name()).collect()
    }

    #[tokio::test]
    async fn test_list_without_search_returns_all() {
        let handler = ListEmployeesHandler::new(seeded_repo().await);

        let all = handler.handle(ListEmployees { search: None }).await.unwrap();
        assert_eq!(names(&all), vec!["Ann", "Bob", "Carl"]);

        let empty = handler
            .handle(ListEmployees {
                search: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(names(&empty), vec!["Ann", "Bob", "Carl"]);
    }

    #[tokio::test]
    async fn test_list_with_search_matches_name_or_position() {
        let handler = ListEmployeesHandler::new(seeded_repo().await);

        let by_name = handler
            .handle(ListEmployees {
                search: Some("Bo".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(names(&by_name), vec!["Bob"]);

        let by_position = handler
            .handle(ListEmployees {
                search: Some("Dev".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(names(&by_position), vec!["Ann", "Carl"]);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let handler = GetEmployeeHandler::new(seeded_repo().await);
        let result = handler
            .handle(GetEmployee {
                employee_id: EmployeeId::new(404),
            })
            .await;

        match result {
            Err(ApplicationError::NotFound { resource_type, id }) => {
                assert_eq!(resource_type, "Employee");
                assert_eq!(id, "404");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
