//! Repository for the `classes` table.

use std::collections::HashMap;

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::class::{Class, ClassWithStudents, CreateClass, UpdateClass};
use crate::models::student::Student;
use crate::repositories::StudentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a class by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class by ID, enriched with its students.
    pub async fn find_by_id_with_students(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClassWithStudents>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(class) => Ok(Some(Self::attach_students(pool, class).await?)),
            None => Ok(None),
        }
    }

    /// List all classes ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY id");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    /// List all classes, each with its students.
    ///
    /// Issues one query for the classes and one for all of their students.
    pub async fn list_with_students(pool: &PgPool) -> Result<Vec<ClassWithStudents>, sqlx::Error> {
        let classes = Self::list(pool).await?;
        let ids: Vec<DbId> = classes.iter().map(|c| c.id).collect();

        let mut by_class: HashMap<DbId, Vec<Student>> = HashMap::new();
        for student in StudentRepo::list_by_class_ids(pool, &ids).await? {
            by_class.entry(student.class_id).or_default().push(student);
        }

        Ok(classes
            .into_iter()
            .map(|class| {
                let students = by_class.remove(&class.id).unwrap_or_default();
                ClassWithStudents { class, students }
            })
            .collect())
    }

    /// Load the students of an already-fetched class.
    pub async fn attach_students(
        pool: &PgPool,
        class: Class,
    ) -> Result<ClassWithStudents, sqlx::Error> {
        let students = StudentRepo::list_by_class(pool, class.id).await?;
        Ok(ClassWithStudents { class, students })
    }

    /// Replace the name and description of a class.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                name = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class and all of its students in one transaction.
    ///
    /// Returns the number of students removed, or `None` if the class does
    /// not exist. The class row is locked first so no student can be
    /// attached to it between the two deletes.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM classes WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let students_removed = sqlx::query("DELETE FROM students WHERE class_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(class_id = id, students_removed, "Class deleted with its students");
        Ok(Some(students_removed))
    }
}
