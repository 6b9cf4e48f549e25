//! Student entity stored in the registry.

/// A student record.
///
/// The `id` is assigned by the store on insert and never changes afterwards,
/// even across full-record replacement.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, age: i64) -> Self {
        Self { id, name, age }
    }
}

/// Input data for creating or replacing a student.
///
/// Carries every required field except the store-assigned `id`.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
}
