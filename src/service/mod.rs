//! CharacterStore: single-row CRUD using the SQL builder; RequestValidator: payload shape rules.

mod crud;
mod validation;
pub use crud::CharacterStore;
pub use validation::{FieldRule, FieldShape, RequestValidator, CHARACTER_RULES};
