//! SQL text for the character table.

mod builder;
pub use builder::*;
