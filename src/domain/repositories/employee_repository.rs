//! Repository trait for employee records.

use crate::domain::entities::{Employee, NewEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the employee collection.
///
/// Mirrors [`crate::domain::repositories::StudentRepository`]: absent records
/// are reported through the return value, never through the error channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists all employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Finds an employee by primary key. `None` means no such record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Inserts a new employee and returns it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;

    /// Replaces the stored record under `id`, leaving the id unchanged.
    /// `None` means no such record existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, employee: NewEmployee) -> Result<Option<Employee>, AppError>;

    /// Deletes an employee. `false` means no such record existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
