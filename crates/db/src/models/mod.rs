//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A composite struct carrying the related entity for display
//! - `Deserialize` create and update DTOs
//!
//! JSON field names are camelCase.

pub mod class;
pub mod student;
