//! DTOs for the employee resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Employee, NewEmployee};

/// Request body for creating or replacing an employee.
///
/// Same optional-field shape as
/// [`crate::api::dto::student::StudentPayload`], so every missing field is
/// reported in one validation pass.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeePayload {
    #[validate(required(message = "This field is required."))]
    #[validate(length(min = 1, max = 255, message = "Must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."))]
    #[validate(length(min = 1, max = 255, message = "Must be between 1 and 255 characters."))]
    pub department: Option<String>,

    #[validate(required(message = "This field is required."))]
    #[validate(range(min = 0, message = "Must not be negative."))]
    pub salary: Option<i64>,
}

impl EmployeePayload {
    /// Converts a validated payload into store input.
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            name: self.name.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
        }
    }
}

/// A single employee in a response body.
#[derive(Debug, Serialize)]
pub struct EmployeeItem {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub salary: i64,
}

impl From<Employee> for EmployeeItem {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            department: e.department,
            salary: e.salary,
        }
    }
}
