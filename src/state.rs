//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::repositories::{EmployeeRepository, StudentRepository};

/// Application context constructed once at startup.
///
/// Handlers receive this via axum's `State` extractor; there is no other
/// shared mutable state in the process.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub students: Arc<dyn StudentRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        students: Arc<dyn StudentRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            db,
            students,
            employees,
        }
    }
}
