//! HTTP handlers for character CRUD.

pub mod character;
pub use character::*;
