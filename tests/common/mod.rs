#![allow(dead_code)]

use campus_registry::infrastructure::persistence::{
    SqliteEmployeeRepository, SqliteStudentRepository,
};
use campus_registry::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn create_test_student(pool: &SqlitePool, name: &str, age: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO students (name, age) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(age)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_employee(
    pool: &SqlitePool,
    name: &str,
    department: &str,
    salary: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO employees (name, department, salary) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(name)
    .bind(department)
    .bind(salary)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_students(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let students = Arc::new(SqliteStudentRepository::new(pool.clone()));
    let employees = Arc::new(SqliteEmployeeRepository::new(pool.clone()));

    AppState::new(pool, students, employees)
}
