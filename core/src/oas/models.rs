#![deny(missing_docs)]

//! # Swagger 2.0 Models
//!
//! Serializable representation of the parts of an OpenAPI 2.0 document that
//! the generator emits. Field order matches the emitted JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Swagger version emitted in the `swagger` field.
pub const SWAGGER_VERSION: &str = "2.0";

/// Content type used for `consumes` and `produces`.
pub const CONTENT_TYPE: &str = "application/json";

/// Prefix of every local definition reference.
pub const DEFINITIONS_ROOT: &str = "#/definitions/";

/// Name of the synthesized response record.
pub const RESPONSE_RECORD_NAME: &str = "Response";

/// The simplified OpenAPI types emitted in `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenApiType {
    /// `boolean`
    Boolean,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `byte`
    Byte,
    /// `string`
    String,
    /// `array`
    Array,
    /// `object`
    Object,
}

impl Display for OpenApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenApiType::Boolean => write!(f, "boolean"),
            OpenApiType::Integer => write!(f, "integer"),
            OpenApiType::Number => write!(f, "number"),
            OpenApiType::Byte => write!(f, "byte"),
            OpenApiType::String => write!(f, "string"),
            OpenApiType::Array => write!(f, "array"),
            OpenApiType::Object => write!(f, "object"),
        }
    }
}

/// A schema fragment: a `$ref`, a typed scalar/array, or an object definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    /// `$ref` target, e.g. `#/definitions/Location`.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// `type`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<OpenApiType>,
    /// `items`, for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,
    /// `properties`, for objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaObject>>,
    /// `required`, omitted entirely for records without fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaObject {
    /// A bare `{type: ...}` fragment.
    pub fn typed(type_: OpenApiType) -> Self {
        Self {
            type_: Some(type_),
            ..Default::default()
        }
    }

    /// `{type: "array", items: ...}`
    pub fn array(items: SchemaObject) -> Self {
        Self {
            type_: Some(OpenApiType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// `{$ref: "#/definitions/<name>"}`
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(definition_ref(name)),
            ..Default::default()
        }
    }

    /// An object definition. `required` lists every property in order and is
    /// omitted when there are none.
    pub fn object(properties: IndexMap<String, SchemaObject>) -> Self {
        let required = if properties.is_empty() {
            None
        } else {
            Some(properties.keys().cloned().collect())
        };
        Self {
            type_: Some(OpenApiType::Object),
            properties: Some(properties),
            required,
            ..Default::default()
        }
    }
}

/// Builds a local `#/definitions/` reference.
pub fn definition_ref(name: &str) -> String {
    format!("{}{}", DEFINITIONS_ROOT, name)
}

/// A body parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (the record's short name).
    pub name: String,
    /// Location; always `body` for generated operations.
    #[serde(rename = "in")]
    pub in_: String,
    /// Record documentation, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Body schema.
    pub schema: SchemaObject,
}

/// A response entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Human readable description.
    pub description: String,
    /// Response body schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

/// An operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Human readable description.
    pub description: String,
    /// Unique operation id.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Parameters.
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code or `default`.
    pub responses: IndexMap<String, ResponseObject>,
}

/// A path item. Only `POST` is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// The POST operation.
    pub post: Operation,
}

/// Generated `paths`, keyed by `/route`.
pub type Paths = IndexMap<String, PathItem>;

/// Generated `definitions`, keyed by record short name.
pub type Definitions = IndexMap<String, SchemaObject>;

/// A Swagger 2.0 document before the caller template is merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Always `2.0`.
    pub swagger: String,
    /// Free-form info object.
    pub info: Map<String, Value>,
    /// Host serving the API.
    pub host: String,
    /// Base path of the API.
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// URI schemes.
    pub schemes: Vec<String>,
    /// Request content types.
    pub consumes: Vec<String>,
    /// Response content types.
    pub produces: Vec<String>,
    /// Generated paths.
    pub paths: Paths,
    /// Generated definitions.
    pub definitions: Definitions,
}

impl Document {
    /// Structural defaults around the generated `paths` and `definitions`.
    pub fn new(paths: Paths, definitions: Definitions) -> Self {
        Self {
            swagger: SWAGGER_VERSION.to_string(),
            info: Map::new(),
            host: String::new(),
            base_path: String::new(),
            schemes: vec!["https".to_string()],
            consumes: vec![CONTENT_TYPE.to_string()],
            produces: vec![CONTENT_TYPE.to_string()],
            paths,
            definitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_has_no_required() {
        let schema = SchemaObject::object(IndexMap::new());
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "object", "properties": {} })
        );
    }

    #[test]
    fn test_object_required_follows_declaration_order() {
        let mut props = IndexMap::new();
        props.insert("z".to_string(), SchemaObject::typed(OpenApiType::String));
        props.insert("a".to_string(), SchemaObject::reference("A"));
        let schema = SchemaObject::object(props);

        assert_eq!(schema.required, Some(vec!["z".to_string(), "a".to_string()]));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "required": ["z", "a"],
                "properties": {
                    "z": { "type": "string" },
                    "a": { "$ref": "#/definitions/A" }
                }
            })
        );
    }

    #[test]
    fn test_document_defaults() {
        let doc = serde_json::to_value(Document::new(Paths::new(), Definitions::new())).unwrap();
        assert_eq!(
            doc,
            json!({
                "swagger": "2.0",
                "info": {},
                "host": "",
                "basePath": "",
                "schemes": ["https"],
                "consumes": ["application/json"],
                "produces": ["application/json"],
                "paths": {},
                "definitions": {}
            })
        );
    }

    #[test]
    fn test_type_display_matches_serialization() {
        for ty in [OpenApiType::Byte, OpenApiType::Integer, OpenApiType::Object] {
            assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.to_string()));
        }
    }
}
