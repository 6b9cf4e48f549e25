//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are bound at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`SqliteStudentRepository`] - Student storage and retrieval
//! - [`SqliteEmployeeRepository`] - Employee storage and retrieval

pub mod sqlite_employee_repository;
pub mod sqlite_student_repository;

pub use sqlite_employee_repository::SqliteEmployeeRepository;
pub use sqlite_student_repository::SqliteStudentRepository;
