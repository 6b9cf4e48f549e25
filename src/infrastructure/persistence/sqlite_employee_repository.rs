//! SQLite implementation of the employee repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// SQLite repository for employee records.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, salary
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, department, salary
            FROM employees
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, department, salary)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, department, salary
            "#,
        )
        .bind(new_employee.name)
        .bind(new_employee.department)
        .bind(new_employee.salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(&self, id: i64, employee: NewEmployee) -> Result<Option<Employee>, AppError> {
        let updated = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = ?1, department = ?2, salary = ?3
            WHERE id = ?4
            RETURNING id, name, department, salary
            "#,
        )
        .bind(employee.name)
        .bind(employee.department)
        .bind(employee.salary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
