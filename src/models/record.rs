//! Flat, ordered entity record as exchanged with the backend.

use super::entity_kind::EntityKind;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity as a field-name → JSON value map, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Accepts only JSON objects; anything else is a malformed payload.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AppError::Other(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Decode a list response such as `GET /api/<entity>/all`.
    pub fn list_from_value(value: Value) -> AppResult<Vec<Self>> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            Value::Null => Ok(Vec::new()),
            other => Err(AppError::Other(format!(
                "expected a JSON array, got {other}"
            ))),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field value as the text a form input or table cell would show.
    /// `null` and missing fields read as `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn key(&self, kind: &EntityKind) -> Option<String> {
        self.text(kind.key.name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
