#![deny(missing_docs)]

//! # Avro Schema Model
//!
//! - **parser**: Reads Avro JSON (`.avsc`) into the `SchemaType` tree.
//!
//! The tree is immutable once parsed. Records are shared through `Arc` so a
//! record referenced from several fields (or several routes) is one value.

pub mod parser;

use std::fmt::Display;
use std::sync::Arc;

pub use parser::{parse_schema, parse_schema_str};

/// A parsed Avro type.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// `null`
    Null,
    /// `boolean`
    Boolean,
    /// `int` (32 bit)
    Int,
    /// `long` (64 bit)
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `bytes`
    Bytes,
    /// `string`
    String,
    /// An array owning its item type.
    Array(Box<SchemaType>),
    /// A map with string keys, owning its value type.
    Map(Box<SchemaType>),
    /// A union of branches.
    Union(Vec<SchemaType>),
    /// A named enum, by full name.
    Enum(String),
    /// A named fixed-size binary, by full name.
    Fixed(String),
    /// A record definition.
    Record(Arc<RecordSchema>),
    /// Back-reference to an enclosing record that is still being defined.
    ///
    /// Produced only for recursive records; the referenced record is always an
    /// ancestor in the same tree.
    Named(String),
}

impl SchemaType {
    /// The Avro type tag, e.g. `"long"` or `"record"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::Boolean => "boolean",
            SchemaType::Int => "int",
            SchemaType::Long => "long",
            SchemaType::Float => "float",
            SchemaType::Double => "double",
            SchemaType::Bytes => "bytes",
            SchemaType::String => "string",
            SchemaType::Array(_) => "array",
            SchemaType::Map(_) => "map",
            SchemaType::Union(_) => "union",
            SchemaType::Enum(_) => "enum",
            SchemaType::Fixed(_) => "fixed",
            SchemaType::Record(_) => "record",
            SchemaType::Named(_) => "record",
        }
    }

    /// Returns the record if this type is one.
    pub fn as_record(&self) -> Option<&Arc<RecordSchema>> {
        match self {
            SchemaType::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Array(items) => write!(f, "array<{}>", items),
            SchemaType::Map(values) => write!(f, "map<{}>", values),
            SchemaType::Union(branches) => {
                let names: Vec<String> = branches.iter().map(ToString::to_string).collect();
                write!(f, "union<{}>", names.join(", "))
            }
            SchemaType::Enum(name) => write!(f, "enum:{}", name),
            SchemaType::Fixed(name) => write!(f, "fixed:{}", name),
            SchemaType::Record(record) => write!(f, "record:{}", record.fullname),
            SchemaType::Named(name) => write!(f, "record:{}", name),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

/// An Avro record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Dot-separated namespace plus short name, e.g. `com.acme.Question`.
    pub fullname: String,
    /// Optional documentation string.
    pub doc: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<RecordField>,
}

impl RecordSchema {
    /// Creates a record with no documentation.
    pub fn new(fullname: impl Into<String>, fields: Vec<RecordField>) -> Self {
        Self {
            fullname: fullname.into(),
            doc: None,
            fields,
        }
    }

    /// Sets the documentation string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The last dot-separated segment of the full name.
    pub fn short_name(&self) -> &str {
        short_name(&self.fullname)
    }
}

/// A single record field.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    /// Field name.
    pub name: String,
    /// Optional documentation string.
    pub doc: Option<String>,
    /// Field type.
    pub schema: SchemaType,
}

impl RecordField {
    /// Creates an undocumented field.
    pub fn new(name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            name: name.into(),
            doc: None,
            schema,
        }
    }
}

/// Extracts the short name from a full name.
/// e.g. `com.acme.Question` -> `Question`
pub fn short_name(fullname: &str) -> &str {
    fullname.rsplit('.').next().unwrap_or(fullname)
}
