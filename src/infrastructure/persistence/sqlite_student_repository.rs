//! SQLite implementation of the student repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// SQLite repository for student records.
///
/// Ids come from the table's AUTOINCREMENT primary key, so they are unique
/// and never reused after deletion.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, age
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, age
            FROM students
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, age)
            VALUES (?1, ?2)
            RETURNING id, name, age
            "#,
        )
        .bind(new_student.name)
        .bind(new_student.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    async fn update(&self, id: i64, student: NewStudent) -> Result<Option<Student>, AppError> {
        // RETURNING yields no row when the id does not exist, which doubles
        // as the not-found signal.
        let updated = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = ?1, age = ?2
            WHERE id = ?3
            RETURNING id, name, age
            "#,
        )
        .bind(student.name)
        .bind(student.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
