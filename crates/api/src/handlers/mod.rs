pub mod class;
pub mod student;

use roster_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Reject an update whose body names a different record than its path.
///
/// The body `id` is optional; clients that omit it are accepted.
fn ensure_body_id_matches(path_id: DbId, body_id: Option<DbId>) -> AppResult<()> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
            "Body id {body_id} does not match path id {path_id}"
        ))),
        _ => Ok(()),
    }
}
