//! Moranguinho API: character records over HTTP/JSON, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, FieldViolation, ValidationErrors};
pub use model::{Character, CharacterFields, CharacterPatch, OneOrMany};
pub use state::AppState;
pub use routes::{app_router, character_routes, common_routes, common_routes_with_ready, docs_routes, ApiDoc};
pub use service::{CharacterStore, RequestValidator};
