//! Student entity model and DTOs.

use chrono::NaiveDate;
use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::class::Class;

/// A student row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub class_id: DbId,
}

/// A student together with the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentWithClass {
    #[serde(flatten)]
    pub student: Student,
    pub class: Class,
}

/// Flat row produced by joining `students` with `classes`.
#[derive(Debug, FromRow)]
pub struct StudentClassRow {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub class_id: DbId,
    pub class_name: String,
    pub class_description: Option<String>,
}

impl From<StudentClassRow> for StudentWithClass {
    fn from(row: StudentClassRow) -> Self {
        Self {
            class: Class {
                id: row.class_id,
                name: row.class_name,
                description: row.class_description,
            },
            student: Student {
                id: row.id,
                full_name: row.full_name,
                email: row.email,
                date_of_birth: row.date_of_birth,
                class_id: row.class_id,
            },
        }
    }
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub class_id: DbId,
}

/// DTO for replacing the writable fields of an existing student.
///
/// `id` is optional; when sent it must match the id in the request path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    pub id: Option<DbId>,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub class_id: DbId,
}
