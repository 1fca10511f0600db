//! Domain types, error taxonomy and field validation rules shared by the
//! `roster-db` and `roster-api` crates.

pub mod class;
pub mod error;
pub mod student;
pub mod text;
pub mod types;
