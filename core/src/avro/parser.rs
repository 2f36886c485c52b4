#![deny(missing_docs)]

//! # Avro Schema Reader
//!
//! Parses Avro JSON schemas into `SchemaType` trees.
//!
//! Named types are resolved against the types defined earlier in the same
//! document, honouring Avro namespace inheritance. A reference to a record that
//! is still being defined (recursion) becomes `SchemaType::Named`.

use crate::avro::{RecordField, RecordSchema, SchemaType};
use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Parses a raw Avro schema string.
///
/// # Arguments
///
/// * `content` - The raw JSON of an `.avsc` file.
pub fn parse_schema_str(content: &str) -> AppResult<SchemaType> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| AppError::InvalidSchema(format!("Failed to parse Avro JSON: {}", e)))?;
    parse_schema(&value)
}

/// Parses an Avro schema that has already been decoded as JSON.
///
/// # Arguments
///
/// * `value` - A primitive name, a union array, or a complex type object.
pub fn parse_schema(value: &Value) -> AppResult<SchemaType> {
    SchemaReader::default().read(value, None)
}

#[derive(Default)]
struct SchemaReader {
    /// Completed named types, by full name.
    named: HashMap<String, SchemaType>,
    /// Records whose fields are still being read.
    pending: HashSet<String>,
}

impl SchemaReader {
    fn read(&mut self, value: &Value, namespace: Option<&str>) -> AppResult<SchemaType> {
        match value {
            Value::String(name) => self.resolve(name, namespace),
            Value::Array(branches) => {
                let branches = branches
                    .iter()
                    .map(|branch| self.read(branch, namespace))
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(SchemaType::Union(branches))
            }
            Value::Object(obj) => self.read_complex(obj, namespace),
            other => Err(AppError::InvalidSchema(format!(
                "Unexpected schema value: {}",
                other
            ))),
        }
    }

    fn resolve(&self, name: &str, namespace: Option<&str>) -> AppResult<SchemaType> {
        if let Some(primitive) = primitive(name) {
            return Ok(primitive);
        }

        let fullname = qualify(name, namespace);
        if let Some(found) = self.named.get(&fullname).or_else(|| self.named.get(name)) {
            return Ok(found.clone());
        }
        if self.pending.contains(&fullname) {
            return Ok(SchemaType::Named(fullname));
        }
        if self.pending.contains(name) {
            return Ok(SchemaType::Named(name.to_string()));
        }

        Err(AppError::InvalidSchema(format!("Undefined type: {}", name)))
    }

    fn read_complex(
        &mut self,
        obj: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> AppResult<SchemaType> {
        let type_value = obj
            .get("type")
            .ok_or_else(|| AppError::InvalidSchema("Schema object has no 'type'".into()))?;

        let tag = match type_value {
            Value::String(tag) => tag.as_str(),
            // e.g. {"type": {"type": "array", ...}}
            nested => return self.read(nested, namespace),
        };

        match tag {
            "record" | "error" => self.read_record(obj, namespace),
            "enum" => {
                let (fullname, _) = named_type_name(obj, namespace)?;
                self.register(fullname.clone(), SchemaType::Enum(fullname))
            }
            "fixed" => {
                let (fullname, _) = named_type_name(obj, namespace)?;
                self.register(fullname.clone(), SchemaType::Fixed(fullname))
            }
            "array" => {
                let items = obj.get("items").ok_or_else(|| {
                    AppError::InvalidSchema("Array schema has no 'items'".into())
                })?;
                Ok(SchemaType::Array(Box::new(self.read(items, namespace)?)))
            }
            "map" => {
                let values = obj.get("values").ok_or_else(|| {
                    AppError::InvalidSchema("Map schema has no 'values'".into())
                })?;
                Ok(SchemaType::Map(Box::new(self.read(values, namespace)?)))
            }
            // {"type": "string", "logicalType": ...} or {"type": "ns.Named"}
            other => self.resolve(other, namespace),
        }
    }

    fn read_record(
        &mut self,
        obj: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> AppResult<SchemaType> {
        let (fullname, record_namespace) = named_type_name(obj, namespace)?;
        self.ensure_undefined(&fullname)?;

        let fields = obj
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                AppError::InvalidSchema(format!("Record '{}' has no 'fields' array", fullname))
            })?;

        self.pending.insert(fullname.clone());

        let mut parsed = Vec::with_capacity(fields.len());
        for field in fields {
            let field = self.read_field(field, &fullname, record_namespace.as_deref())?;
            if parsed.iter().any(|f: &RecordField| f.name == field.name) {
                return Err(AppError::InvalidSchema(format!(
                    "Duplicate field '{}' in record '{}'",
                    field.name, fullname
                )));
            }
            parsed.push(field);
        }

        self.pending.remove(&fullname);

        let record = RecordSchema {
            fullname: fullname.clone(),
            doc: string_attr(obj, "doc"),
            fields: parsed,
        };
        self.register(fullname, SchemaType::Record(Arc::new(record)))
    }

    fn read_field(
        &mut self,
        field: &Value,
        record: &str,
        namespace: Option<&str>,
    ) -> AppResult<RecordField> {
        let field = field.as_object().ok_or_else(|| {
            AppError::InvalidSchema(format!("Field of record '{}' is not an object", record))
        })?;
        let name = string_attr(field, "name").ok_or_else(|| {
            AppError::InvalidSchema(format!("Field of record '{}' has no name", record))
        })?;
        let ty = field.get("type").ok_or_else(|| {
            AppError::InvalidSchema(format!("Field '{}.{}' has no type", record, name))
        })?;

        Ok(RecordField {
            schema: self.read(ty, namespace)?,
            doc: string_attr(field, "doc"),
            name,
        })
    }

    fn ensure_undefined(&self, fullname: &str) -> AppResult<()> {
        if self.named.contains_key(fullname) || self.pending.contains(fullname) {
            return Err(AppError::InvalidSchema(format!(
                "Duplicate type name: {}",
                fullname
            )));
        }
        Ok(())
    }

    fn register(&mut self, fullname: String, ty: SchemaType) -> AppResult<SchemaType> {
        if self.named.contains_key(&fullname) {
            return Err(AppError::InvalidSchema(format!(
                "Duplicate type name: {}",
                fullname
            )));
        }
        self.named.insert(fullname, ty.clone());
        Ok(ty)
    }
}

fn primitive(name: &str) -> Option<SchemaType> {
    let ty = match name {
        "null" => SchemaType::Null,
        "boolean" => SchemaType::Boolean,
        "int" => SchemaType::Int,
        "long" => SchemaType::Long,
        "float" => SchemaType::Float,
        "double" => SchemaType::Double,
        "bytes" => SchemaType::Bytes,
        "string" => SchemaType::String,
        _ => return None,
    };
    Some(ty)
}

fn qualify(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() && !name.contains('.') => format!("{}.{}", ns, name),
        _ => name.to_string(),
    }
}

/// Returns the full name of a named type and the namespace its children inherit.
fn named_type_name(
    obj: &Map<String, Value>,
    namespace: Option<&str>,
) -> AppResult<(String, Option<String>)> {
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::InvalidSchema("Named type has no 'name'".into()))?;

    if let Some((ns, _)) = name.rsplit_once('.') {
        return Ok((name.to_string(), Some(ns.to_string())));
    }

    let own_namespace = obj
        .get("namespace")
        .and_then(Value::as_str)
        .or(namespace)
        .filter(|ns| !ns.is_empty())
        .map(str::to_string);

    Ok((qualify(name, own_namespace.as_deref()), own_namespace))
}

fn string_attr(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
