//! Handlers for the `/students` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::student;
use roster_core::types::DbId;
use roster_db::models::student::{CreateStudent, StudentWithClass, UpdateStudent};
use roster_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_body_id_matches;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// Name the missing class when a write trips the `class_id` foreign key.
fn class_reference_error(err: sqlx::Error, class_id: DbId) -> AppError {
    if roster_db::is_foreign_key_violation(&err) {
        AppError::Core(CoreError::ForeignKey {
            entity: "Class",
            id: class_id,
        })
    } else {
        AppError::Database(err)
    }
}

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudentWithClass>>> {
    let students = StudentRepo::list_with_class(&state.pool).await?;
    tracing::debug!(count = students.len(), "Listed students");
    Ok(Json(students))
}

/// GET /api/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<StudentWithClass>> {
    let student = StudentRepo::find_by_id_with_class(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// POST /api/students
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<StudentWithClass>)> {
    student::validate_student(&input.full_name, &input.email, input.date_of_birth)?;

    let created = StudentRepo::create(&state.pool, &input)
        .await
        .map_err(|e| class_reference_error(e, input.class_id))?;
    tracing::info!(
        id = created.student.id,
        class_id = created.student.class_id,
        "Student created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/students/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateStudent>,
) -> AppResult<Json<StudentWithClass>> {
    ensure_body_id_matches(id, input.id)?;
    student::validate_student(&input.full_name, &input.email, input.date_of_birth)?;

    let updated = StudentRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| class_reference_error(e, input.class_id))?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, class_id = updated.student.class_id, "Student updated");

    Ok(Json(updated))
}

/// DELETE /api/students/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if StudentRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
