//! Repository for the `students` table.

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{
    CreateStudent, Student, StudentClassRow, StudentWithClass, UpdateStudent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, date_of_birth, class_id";

/// Column list for the `students s JOIN classes c` queries.
const JOINED_COLUMNS: &str = "s.id, s.full_name, s.email, s.date_of_birth, s.class_id, \
    c.name AS class_name, c.description AS class_description";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row joined with its class.
    ///
    /// Fails with a foreign key violation if `class_id` does not reference
    /// an existing class; see [`crate::is_foreign_key_violation`].
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudent,
    ) -> Result<StudentWithClass, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                INSERT INTO students (full_name, email, date_of_birth, class_id)
                VALUES ($1, $2, $3, $4)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM s JOIN classes c ON c.id = s.class_id"
        );
        sqlx::query_as::<_, StudentClassRow>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .bind(input.class_id)
            .fetch_one(pool)
            .await
            .map(StudentWithClass::from)
    }

    /// Find a student by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by ID, joined with its class.
    pub async fn find_by_id_with_class(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentWithClass>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM students s JOIN classes c ON c.id = s.class_id
             WHERE s.id = $1"
        );
        let row = sqlx::query_as::<_, StudentClassRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(StudentWithClass::from))
    }

    /// List all students ordered by ID, each joined with its class.
    pub async fn list_with_class(pool: &PgPool) -> Result<Vec<StudentWithClass>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM students s JOIN classes c ON c.id = s.class_id
             ORDER BY s.id"
        );
        let rows = sqlx::query_as::<_, StudentClassRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(StudentWithClass::from).collect())
    }

    /// List the students of one class ordered by ID.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE class_id = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// List the students of any of the given classes ordered by ID.
    pub async fn list_by_class_ids(
        pool: &PgPool,
        class_ids: &[DbId],
    ) -> Result<Vec<Student>, sqlx::Error> {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM students WHERE class_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(class_ids)
            .fetch_all(pool)
            .await
    }

    /// Replace the writable fields of a student, returning it joined with
    /// its (possibly new) class.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<StudentWithClass>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                UPDATE students SET
                    full_name = $2,
                    email = $3,
                    date_of_birth = $4,
                    class_id = $5,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM s JOIN classes c ON c.id = s.class_id"
        );
        let row = sqlx::query_as::<_, StudentClassRow>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .bind(input.class_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(StudentWithClass::from))
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
