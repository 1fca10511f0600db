//! Handlers for the `/classes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::class;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::class::{ClassWithStudents, CreateClass, UpdateClass};
use roster_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_body_id_matches;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Class", id })
}

/// GET /api/classes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ClassWithStudents>>> {
    let classes = ClassRepo::list_with_students(&state.pool).await?;
    tracing::debug!(count = classes.len(), "Listed classes");
    Ok(Json(classes))
}

/// GET /api/classes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ClassWithStudents>> {
    let class = ClassRepo::find_by_id_with_students(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(class))
}

/// POST /api/classes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClass>,
) -> AppResult<(StatusCode, Json<ClassWithStudents>)> {
    class::validate_class(&input.name, input.description.as_deref())?;

    let created = ClassRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Class created");

    Ok((
        StatusCode::CREATED,
        Json(ClassWithStudents {
            class: created,
            students: Vec::new(),
        }),
    ))
}

/// PUT /api/classes/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateClass>,
) -> AppResult<Json<ClassWithStudents>> {
    ensure_body_id_matches(id, input.id)?;
    class::validate_class(&input.name, input.description.as_deref())?;

    let updated = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, name = %updated.name, "Class updated");

    let class = ClassRepo::attach_students(&state.pool, updated).await?;
    Ok(Json(class))
}

/// DELETE /api/classes/{id}
///
/// Removes the class together with every student that belongs to it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let students_removed = ClassRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, students_removed, "Class deleted");
    Ok(StatusCode::NO_CONTENT)
}
