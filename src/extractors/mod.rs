//! Request extractors mapping rejections onto `AppError`.

pub mod id;
pub mod json;

pub use id::RecordId;
pub use json::JsonBody;
