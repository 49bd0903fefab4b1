use crate::content::{FieldValue, StartupIdeaResult, TextResult};
use crate::error::ApiError;
use crate::workflow::GeneratorType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Authenticated user the library is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Ids become directory names, so only `[A-Za-z0-9._@-]` is accepted.
    pub fn new(id: impl Into<String>) -> Result<Self, ApiError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '@' | '-'));
        if !valid {
            return Err(ApiError::InvalidArgument(format!("Invalid user id: '{}'", id)));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Saved document: `{ ...selectedFields, type, prompt, createdAt }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryRecord {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "type")]
    pub content_type: String,
    pub prompt: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl LibraryRecord {
    /// Record holding the fields one generator type presents.
    pub fn from_startup(
        result: &StartupIdeaResult,
        generator_type: GeneratorType,
        prompt: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let fields = result
            .select(generator_type)
            .into_iter()
            .map(|(field, value)| {
                let value = match value {
                    FieldValue::Text(text) => Value::String(text),
                    FieldValue::Palette(colors) => {
                        Value::Array(colors.into_iter().map(Value::String).collect())
                    }
                };
                (field.key().to_string(), value)
            })
            .collect();

        Self {
            fields,
            content_type: generator_type.as_str().to_string(),
            prompt: prompt.to_string(),
            created_at: format_created_at(created_at),
        }
    }

    pub fn from_text(result: &TextResult, prompt: &str, created_at: DateTime<Utc>) -> Self {
        let mut fields = Map::new();
        fields.insert("text".to_string(), Value::String(result.text.clone()));
        Self {
            fields,
            content_type: "text".to_string(),
            prompt: prompt.to_string(),
            created_at: format_created_at(created_at),
        }
    }

    /// Content-derived identifier.
    pub fn content_id(&self) -> Result<String, ApiError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| ApiError::Generation(format!("Failed to encode record: {}", e)))?;
        let hash = blake3::hash(&bytes);
        Ok(hex::encode(&hash.as_bytes()[..8]))
    }
}

/// A record together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(flatten)]
    pub record: LibraryRecord,
}
