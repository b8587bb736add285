//! SQLite Employee Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{EmployeeRepositoryPort, RepositoryError};
use crate::domain::employee::{Employee, EmployeeDraft, EmployeeId};

/// SQLite Employee Repository
pub struct SqliteEmployeeRepository {
    pool: DbPool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRow {
    employee_id: i64,
    name: String,
    age: i32,
    department: String,
    position: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::from_draft(
            EmployeeId::new(row.employee_id),
            EmployeeDraft {
                name: row.name,
                age: row.age,
                department: row.department,
                position: row.position,
            },
        )
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::SerializationError(e.to_string())
        }
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl EmployeeRepositoryPort for SqliteEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, age, department, position)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(draft.age)
        .bind(&draft.department)
        .bind(&draft.position)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(Employee::from_draft(
            EmployeeId::new(result.last_insert_rowid()),
            draft.clone(),
        ))
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            "SELECT employee_id, name, age, department, position FROM employees WHERE employee_id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            "SELECT employee_id, name, age, department, position FROM employees ORDER BY employee_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_name_or_position_containing(
        &self,
        term: &str,
    ) -> Result<Vec<Employee>, RepositoryError> {
        // instr 为区分大小写的字面子串匹配，% 和 _ 不作通配符
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT employee_id, name, age, department, position FROM employees
            WHERE instr(name, ?) > 0 OR instr(position, ?) > 0
            ORDER BY employee_id
            "#,
        )
        .bind(term)
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn update(&self, employee: &Employee) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, age = ?, department = ?, position = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(employee.name())
        .bind(employee.age())
        .bind(employee.department())
        .bind(employee.position())
        .bind(employee.id().value())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
