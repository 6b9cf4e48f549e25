//! Employee entity stored in the registry.

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub salary: i64,
}

impl Employee {
    /// Creates a new Employee instance.
    pub fn new(id: i64, name: String, department: String, salary: i64) -> Self {
        Self {
            id,
            name,
            department,
            salary,
        }
    }
}

/// Input data for creating or replacing an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub salary: i64,
}
