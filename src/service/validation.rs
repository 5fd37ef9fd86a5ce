//! Request validation against per-field shape rules.

use crate::error::{AppError, ValidationErrors};
use crate::model::{CharacterFields, CharacterPatch};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Accepted JSON shape for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldShape {
    /// JSON string.
    Text,
    /// JSON string, or array whose elements are all strings.
    TextOrList,
}

pub struct FieldRule {
    pub name: &'static str,
    pub shape: FieldShape,
}

/// Writable character fields in column order.
pub const CHARACTER_RULES: &[FieldRule] = &[
    FieldRule { name: "name", shape: FieldShape::Text },
    FieldRule { name: "gender", shape: FieldShape::Text },
    FieldRule { name: "favorite_fruit", shape: FieldShape::Text },
    FieldRule { name: "favorite_color", shape: FieldShape::TextOrList },
    FieldRule { name: "profession", shape: FieldShape::Text },
    FieldRule { name: "personality", shape: FieldShape::Text },
    FieldRule { name: "pet", shape: FieldShape::TextOrList },
    FieldRule { name: "image", shape: FieldShape::Text },
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against rules. Every rule's field must be present and non-null.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in rules {
            match body.get(rule.name) {
                None | Some(Value::Null) => errors.push(rule.name, "is required"),
                Some(v) => check_shape(rule, v, &mut errors),
            }
        }
        finish(errors)
    }

    /// Validate only the fields present in body (for PATCH). Present fields may not be null.
    pub fn validate_partial(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in rules {
            match body.get(rule.name) {
                None => {}
                Some(Value::Null) => errors.push(rule.name, "may not be null"),
                Some(v) => check_shape(rule, v, &mut errors),
            }
        }
        finish(errors)
    }

    /// Full create/replace payload: shape-checked, then typed.
    pub fn character_fields(body: Value) -> Result<CharacterFields, AppError> {
        let map = body_to_map(body)?;
        Self::validate(&map, CHARACTER_RULES)?;
        typed(map)
    }

    /// Merge-patch payload: present fields shape-checked, then typed.
    pub fn character_patch(body: Value) -> Result<CharacterPatch, AppError> {
        let map = body_to_map(body)?;
        Self::validate_partial(&map, CHARACTER_RULES)?;
        typed(map)
    }
}

fn check_shape(rule: &FieldRule, v: &Value, errors: &mut ValidationErrors) {
    let ok = match (rule.shape, v) {
        (_, Value::String(_)) => true,
        (FieldShape::TextOrList, Value::Array(items)) => items.iter().all(Value::is_string),
        _ => false,
    };
    if !ok {
        let message = match rule.shape {
            FieldShape::Text => "must be a string",
            FieldShape::TextOrList => "must be a string or a list of strings",
        };
        errors.push(rule.name, message);
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, ValidationErrors> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(ValidationErrors::single("body", "must be a JSON object")),
    }
}

/// Unknown keys are dropped here; serde ignores them on structs without deny_unknown_fields.
fn typed<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::Validation(ValidationErrors::single("body", e.to_string())))
}
