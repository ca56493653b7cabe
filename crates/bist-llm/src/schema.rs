//! Response schema declaration and validation
//!
//! A [`Schema`] is a plain data contract: it is serialized into the request as
//! the model's required output shape (OpenAPI subset, upper-case type names),
//! and the same value validates the reply after it has been parsed.
//!
//! # Example
//!
//! ```
//! use bist_llm::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::object(vec![
//!     ("name", Schema::string()),
//!     ("signal", Schema::string_enum(["Buy", "Sell", "Neutral"])),
//! ]);
//!
//! assert!(schema.validate(&json!({ "name": "RSI", "signal": "Buy" })).is_ok());
//! assert!(schema.validate(&json!({ "name": "RSI", "signal": "Hold" })).is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Primitive type of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A node of the declared output schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Node type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Optional human-readable description (forwarded to the model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed values for string nodes
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Item schema for array nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Property schemas for object nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    /// Properties that must be present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Declaration order of properties (the model emits them in this order)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<String>>,
}

/// A reply that does not conform to the declared schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema violation at {path}: {message}")]
pub struct SchemaViolation {
    /// JSON path of the offending node, e.g. `$.predictions[1].period`
    pub path: String,
    /// What was wrong
    pub message: String,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            enum_values: None,
            items: None,
            properties: None,
            required: None,
            property_ordering: None,
        }
    }

    /// String node
    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    /// String node restricted to a fixed vocabulary
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::leaf(SchemaType::String)
        }
    }

    /// Array node with the given item schema
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// Object node; every listed property is required and kept in order
    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        let ordering: Vec<String> = properties.iter().map(|(name, _)| (*name).to_string()).collect();
        let properties = properties
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();

        Self {
            properties: Some(properties),
            required: Some(ordering.clone()),
            property_ordering: Some(ordering),
            ..Self::leaf(SchemaType::Object)
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate a parsed value against this schema
    ///
    /// Checks node types, required properties and enum membership. Extra
    /// properties are tolerated.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        let type_ok = match self.schema_type {
            SchemaType::String => value.is_string(),
            SchemaType::Number => value.is_number(),
            SchemaType::Integer => value.is_i64() || value.is_u64(),
            SchemaType::Boolean => value.is_boolean(),
            SchemaType::Array => value.is_array(),
            SchemaType::Object => value.is_object(),
        };
        if !type_ok {
            return Err(violation(
                path,
                format!("expected {:?}, found {}", self.schema_type, json_kind(value)),
            ));
        }

        if let (Some(allowed), Some(s)) = (&self.enum_values, value.as_str()) {
            if !allowed.iter().any(|a| a == s) {
                return Err(violation(
                    path,
                    format!("'{s}' is not one of [{}]", allowed.join(", ")),
                ));
            }
        }

        if let (Some(items), Some(array)) = (&self.items, value.as_array()) {
            for (i, item) in array.iter().enumerate() {
                items.validate_at(item, &format!("{path}[{i}]"))?;
            }
        }

        if let Some(object) = value.as_object() {
            for name in self.required.iter().flatten() {
                if !object.contains_key(name) {
                    return Err(violation(path, format!("missing required property '{name}'")));
                }
            }
            for (name, schema) in self.properties.iter().flatten() {
                if let Some(child) = object.get(name) {
                    schema.validate_at(child, &format!("{path}.{name}"))?;
                }
            }
        }

        Ok(())
    }
}

fn violation(path: &str, message: String) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        message,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
