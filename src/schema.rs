//! Prompt Schema Contract
//!
//! Declarative description of the fields a prompt input or a model output must carry.
//! A `SchemaDescriptor` is rendered into the provider's structured-output constraint and
//! then used again to validate whatever the provider sends back. Validation never
//! coerces or drops fields: the first offending value is reported with its path.

use crate::error::SchemaValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Format constraint on the items of a string list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFormat {
    Any,
    /// `#RRGGBB` or `#RGB`
    HexColor,
}

/// Primitive type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    NonEmptyString,
    StringList(ItemFormat),
}

/// One required field of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    /// Steers the model; not used for validation.
    pub description: String,
}

impl FieldSpec {
    pub fn new(name: &str, field_type: FieldType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            description: description.to_string(),
        }
    }
}

/// Declarative object schema: every field is required, no others are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

impl SchemaDescriptor {
    pub fn new(name: &str, description: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validate a candidate value against this schema.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let object = value.as_object().ok_or_else(|| {
            SchemaValidationError::new("/", format!("expected object, found {}", kind_of(value)))
        })?;

        for field in &self.fields {
            let path = format!("/{}", field.name);
            let candidate = object
                .get(&field.name)
                .ok_or_else(|| SchemaValidationError::new(&path, "missing required field"))?;
            validate_field(&path, field.field_type, candidate)?;
        }

        if let Some(extra) = object.keys().find(|key| self.field(key).is_none()) {
            return Err(SchemaValidationError::new(
                format!("/{}", extra),
                "field is not declared by the schema",
            ));
        }

        Ok(())
    }

    /// JSON Schema rendering for OpenAI-style `response_format` constraints.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut prop = match field.field_type {
                // Non-emptiness is enforced by `validate`, not by the provider.
                FieldType::String | FieldType::NonEmptyString => json!({ "type": "string" }),
                FieldType::StringList(format) => {
                    let mut items = json!({ "type": "string" });
                    if format == ItemFormat::HexColor {
                        items["pattern"] = json!(HEX_COLOR_PATTERN);
                    }
                    json!({ "type": "array", "items": items })
                }
            };
            prop["description"] = json!(field.description);
            properties.insert(field.name.clone(), prop);
        }

        json!({
            "type": "object",
            "description": self.description,
            "properties": properties,
            "required": self.field_names().collect::<Vec<_>>(),
            "additionalProperties": false,
        })
    }

    /// OpenAPI subset accepted by Gemini's `responseSchema`.
    pub fn to_openapi_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let prop = match field.field_type {
                FieldType::String | FieldType::NonEmptyString => json!({
                    "type": "STRING",
                    "description": field.description,
                }),
                FieldType::StringList(_) => json!({
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": field.description,
                }),
            };
            properties.insert(field.name.clone(), prop);
        }

        let names: Vec<&str> = self.field_names().collect();
        json!({
            "type": "OBJECT",
            "description": self.description,
            "properties": properties,
            "required": names,
            "propertyOrdering": names,
        })
    }
}

const HEX_COLOR_PATTERN: &str = "^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$";

/// True for `#RRGGBB` and `#RGB`.
pub fn is_hex_color(candidate: &str) -> bool {
    match candidate.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 6 || digits.len() == 3)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn validate_field(
    path: &str,
    field_type: FieldType,
    value: &Value,
) -> Result<(), SchemaValidationError> {
    match field_type {
        FieldType::String => expect_string(path, value).map(|_| ()),
        FieldType::NonEmptyString => {
            let s = expect_string(path, value)?;
            if s.trim().is_empty() {
                return Err(SchemaValidationError::new(path, "string must not be empty"));
            }
            Ok(())
        }
        FieldType::StringList(format) => {
            let items = value.as_array().ok_or_else(|| {
                SchemaValidationError::new(path, format!("expected array, found {}", kind_of(value)))
            })?;
            for (idx, item) in items.iter().enumerate() {
                let item_path = format!("{}/{}", path, idx);
                let s = expect_string(&item_path, item)?;
                if format == ItemFormat::HexColor && !is_hex_color(s) {
                    return Err(SchemaValidationError::new(
                        item_path,
                        format!("'{}' is not a hex color code", s),
                    ));
                }
            }
            Ok(())
        }
    }
}

fn expect_string<'a>(path: &str, value: &'a Value) -> Result<&'a str, SchemaValidationError> {
    value.as_str().ok_or_else(|| {
        SchemaValidationError::new(path, format!("expected string, found {}", kind_of(value)))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
