//! Resource route configuration.

use crate::api::handlers::{
    create_employee_handler, create_student_handler, delete_employee_handler,
    delete_student_handler, employee_detail_handler, employee_list_handler,
    student_detail_handler, student_list_handler, update_employee_handler, update_student_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for both registry resources.
///
/// # Endpoints
///
/// - `GET    /students`        - List all students
/// - `POST   /students`        - Create a student
/// - `GET    /students/{id}`   - Retrieve a student
/// - `PUT    /students/{id}`   - Replace a student
/// - `DELETE /students/{id}`   - Delete a student
/// - `GET    /employees`        - List all employees
/// - `POST   /employees`        - Create an employee
/// - `GET    /employees/{id}`   - Retrieve an employee
/// - `PUT    /employees/{id}`   - Replace an employee
/// - `DELETE /employees/{id}`   - Delete an employee
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(student_list_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(student_detail_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .route(
            "/employees",
            get(employee_list_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(employee_detail_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
}
