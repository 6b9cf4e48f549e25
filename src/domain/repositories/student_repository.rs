//! Repository trait for student records.

use crate::domain::entities::{NewStudent, Student};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the student collection.
///
/// Absent records are reported through the return value (`None` / `false`),
/// never through the error channel, so handlers decide the response status
/// explicitly.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStudentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Lists all students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Finds a student by primary key. `None` means no such record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Inserts a new student and returns it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Replaces the stored record under `id`, leaving the id unchanged.
    /// `None` means no such record existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, student: NewStudent) -> Result<Option<Student>, AppError>;

    /// Deletes a student. `false` means no such record existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
