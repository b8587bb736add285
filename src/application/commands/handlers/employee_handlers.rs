//! Employee Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateEmployee, DeleteEmployee, UpdateEmployee};
use crate::application::error::ApplicationError;
use crate::application::ports::EmployeeRepositoryPort;
use crate::domain::employee::Employee;

// ============================================================================
// CreateEmployee
// ============================================================================

/// CreateEmployee Handler
pub struct CreateEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl CreateEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, command: CreateEmployee) -> Result<Employee, ApplicationError> {
        let employee = self.employee_repo.insert(&command.draft).await?;

        tracing::info!(
            employee_id = %employee.id(),
            name = %employee.name(),
            "Employee created"
        );

        Ok(employee)
    }
}

// ============================================================================
// UpdateEmployee
// ============================================================================

/// UpdateEmployee Handler
///
/// 先读后写，不包裹事务：读写之间若记录被删除，写入返回 NotFound
pub struct UpdateEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl UpdateEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, command: UpdateEmployee) -> Result<Employee, ApplicationError> {
        let employee_id = command.employee_id;

        let mut employee = self
            .employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Employee", employee_id))?;

        employee.overwrite(command.draft);

        if !self.employee_repo.update(&employee).await? {
            tracing::warn!(employee_id = %employee_id, "Employee vanished before update");
            return Err(ApplicationError::not_found("Employee", employee_id));
        }

        tracing::info!(employee_id = %employee_id, "Employee updated");

        Ok(employee)
    }
}

// ============================================================================
// DeleteEmployee
// ============================================================================

/// DeleteEmployee Handler
///
/// 删除不存在的 ID 返回 NotFound
pub struct DeleteEmployeeHandler {
    employee_repo: Arc<dyn EmployeeRepositoryPort>,
}

impl DeleteEmployeeHandler {
    pub fn new(employee_repo: Arc<dyn EmployeeRepositoryPort>) -> Self {
        Self { employee_repo }
    }

    pub async fn handle(&self, command: DeleteEmployee) -> Result<(), ApplicationError> {
        let employee_id = command.employee_id;

        if !self.employee_repo.delete_by_id(employee_id).await? {
            return Err(ApplicationError::not_found("Employee", employee_id));
        }

        tracing::info!(employee_id = %employee_id, "Employee deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;
    use crate::domain::employee::{EmployeeDraft, EmployeeId};
    use async_trait::async_trait;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteEmployeeRepository,
    };

    async fn setup_repo() -> Arc<dyn EmployeeRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteEmployeeRepository::new(pool))
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = setup_repo().await;
        let handler = CreateEmployeeHandler::new(repo.clone());

        let first = handler
            .handle(CreateEmployee {
                draft: EmployeeDraft::new("Ann", 30, "Eng", "Dev"),
            })
            .await
            .unwrap();
        let second = handler
            .handle(CreateEmployee {
                draft: EmployeeDraft::new("Bob", 45, "Ops", "Manager"),
            })
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        let stored = repo.find_by_id(first.id()).await.unwrap().unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = setup_repo().await;
        let created = CreateEmployeeHandler::new(repo.clone())
            .handle(CreateEmployee {
                draft: EmployeeDraft::new("Ann", 30, "Eng", "Dev"),
            })
            .await
            .unwrap();

        let updated = UpdateEmployeeHandler::new(repo.clone())
            .handle(UpdateEmployee {
                employee_id: created.id(),
                draft: EmployeeDraft::new("Anna", 31, "Research", "Lead"),
            })
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        let stored = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Anna");
        assert_eq!(stored.age(), 31);
        assert_eq!(stored.department(), "Research");
        assert_eq!(stored.position(), "Lead");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = setup_repo().await;
        let result = UpdateEmployeeHandler::new(repo)
            .handle(UpdateEmployee {
                employee_id: EmployeeId::new(999),
                draft: EmployeeDraft::new("Ghost", 1, "None", "None"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = setup_repo().await;
        let created = CreateEmployeeHandler::new(repo.clone())
            .handle(CreateEmployee {
                draft: EmployeeDraft::new("Ann", 30, "Eng", "Dev"),
            })
            .await
            .unwrap();

        let handler = DeleteEmployeeHandler::new(repo.clone());
        handler
            .handle(DeleteEmployee {
                employee_id: created.id(),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(created.id()).await.unwrap().is_none());

        let again = handler
            .handle(DeleteEmployee {
                employee_id: created.id(),
            })
            .await;
        assert!(matches!(again, Err(ApplicationError::NotFound { .. })));
    }

    /// 读取时记录存在、写入时已被并发删除的仓储
    struct VanishingRepository {
        existing: Employee,
    }

    #[async_trait]
    impl EmployeeRepositoryPort for VanishingRepository {
        async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, RepositoryError> {
            Ok(Employee::from_draft(self.existing.id(), draft.clone()))
        }

        async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
            Ok(Some(self.existing.clone()))
        }

        async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
            Ok(vec![self.existing.clone()])
        }

        async fn find_by_name_or_position_containing(
            &self,
            _term: &str,
        ) -> Result<Vec<Employee>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn update(&self, _employee: &Employee) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn delete_by_id(&self, _id: EmployeeId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_update_of_concurrently_deleted_row_is_not_found() {
        let repo = Arc::new(VanishingRepository {
            existing: Employee::from_draft(
                EmployeeId::new(1),
                EmployeeDraft::new("Ann", 30, "Eng", "Dev"),
            ),
        });

        let result = UpdateEmployeeHandler::new(repo)
            .handle(UpdateEmployee {
                employee_id: EmployeeId::new(1),
                draft: EmployeeDraft::new("Ann", 31, "Eng", "Lead"),
            })
            .await;

        match result {
            Err(ApplicationError::NotFound { resource_type, id }) => {
                assert_eq!(resource_type, "Employee");
                assert_eq!(id, "1");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
