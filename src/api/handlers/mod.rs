//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod employees;
pub mod health;
pub mod students;

pub use employees::{
    create_employee_handler, delete_employee_handler, employee_detail_handler,
    employee_list_handler, update_employee_handler,
};
pub use health::health_handler;
pub use students::{
    create_student_handler, delete_student_handler, student_detail_handler, student_list_handler,
    update_student_handler,
};
