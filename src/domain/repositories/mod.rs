//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`StudentRepository`] - Student CRUD operations
//! - [`EmployeeRepository`] - Employee CRUD operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod employee_repository;
pub mod student_repository;

pub use employee_repository::EmployeeRepository;
pub use student_repository::StudentRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
