//! Core domain entities representing the registry data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Student`] - A student record
//! - [`Employee`] - An employee record
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewStudent` and `NewEmployee` carry every required field except the
//! store-assigned `id`.

pub mod employee;
pub mod student;

pub use employee::{Employee, NewEmployee};
pub use student::{NewStudent, Student};
