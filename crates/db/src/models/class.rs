//! Class entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::student::Student;

/// A class row from the `classes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// A class together with the students that reference it.
///
/// The nested students carry only their `classId`, never the class itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassWithStudents {
    #[serde(flatten)]
    pub class: Class,
    pub students: Vec<Student>,
}

/// DTO for creating a new class.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClass {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing the writable fields of an existing class.
///
/// `id` is optional; when sent it must match the id in the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClass {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}
