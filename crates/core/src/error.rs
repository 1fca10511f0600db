use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A write referenced a parent row that does not exist.
    #[error("Foreign key violation: {entity} with id {id} does not exist")]
    ForeignKey { entity: &'static str, id: DbId },
}
