//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod class_repo;
pub mod student_repo;

pub use class_repo::ClassRepo;
pub use student_repo::StudentRepo;
