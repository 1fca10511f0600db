pub mod class;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /classes                 list, create
/// /classes/{id}            get, update, delete (cascades to students)
///
/// /students                list, create
/// /students/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/classes", class::router())
        .nest("/students", student::router())
}
