//! Character record types as seen at the HTTP boundary and in the `characters` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A field that accepts either one string or an ordered list of strings.
/// The submitted shape is kept as-is in storage and in responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for OneOrMany {
    fn from(s: &str) -> Self {
        OneOrMany::One(s.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(v: Vec<&str>) -> Self {
        OneOrMany::Many(v.into_iter().map(String::from).collect())
    }
}

/// The eight writable fields. Body of create and replace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CharacterFields {
    pub name: String,
    pub gender: String,
    pub favorite_fruit: String,
    #[sqlx(json)]
    pub favorite_color: OneOrMany,
    pub profession: String,
    pub personality: String,
    #[sqlx(json)]
    pub pet: OneOrMany,
    pub image: String,
}

/// Stored record: storage-assigned `id` plus the writable fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Character {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: CharacterFields,
}

/// Merge patch: only `Some` fields are written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_fruit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CharacterPatch {
    pub fn is_empty(&self) -> bool {
        *self == CharacterPatch::default()
    }
}
