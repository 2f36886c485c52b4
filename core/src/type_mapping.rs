#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts Avro field types into Swagger 2.0 schema fragments.
//! Handles primitives, arrays, and record references.
//!
//! | Avro | Fragment |
//! |---|---|
//! | `boolean` | `{type: boolean}` |
//! | `int`, `long` | `{type: integer}` |
//! | `float`, `double` | `{type: number}` |
//! | `bytes` | `{type: byte}` |
//! | `string` | `{type: string}` |
//! | `array` | `{type: array, items: ...}` |
//! | `record` | `{$ref: #/definitions/<short name>}` |
//!
//! Anything else is rejected rather than dropped from the document.

use crate::avro::{short_name, RecordSchema, SchemaType};
use crate::error::{AppError, AppResult};
use crate::oas::models::{OpenApiType, SchemaObject};
use std::sync::Arc;

/// Maps a field type to a schema fragment.
///
/// Records are not expanded here: they become a `$ref` and are pushed onto
/// `pending` so the caller can translate them fully later. Back-references to
/// an enclosing record only produce the `$ref`.
///
/// # Arguments
///
/// * `ty` - The Avro type of a field or array item.
/// * `pending` - Work stack of records awaiting full translation.
pub fn map_type(ty: &SchemaType, pending: &mut Vec<Arc<RecordSchema>>) -> AppResult<SchemaObject> {
    match ty {
        SchemaType::Boolean => Ok(SchemaObject::typed(OpenApiType::Boolean)),
        SchemaType::Int | SchemaType::Long => Ok(SchemaObject::typed(OpenApiType::Integer)),
        SchemaType::Float | SchemaType::Double => Ok(SchemaObject::typed(OpenApiType::Number)),
        SchemaType::Bytes => Ok(SchemaObject::typed(OpenApiType::Byte)),
        SchemaType::String => Ok(SchemaObject::typed(OpenApiType::String)),
        SchemaType::Array(items) => Ok(SchemaObject::array(map_type(items, pending)?)),
        SchemaType::Record(record) => {
            pending.push(Arc::clone(record));
            Ok(SchemaObject::reference(record.short_name()))
        }
        SchemaType::Named(fullname) => Ok(SchemaObject::reference(short_name(fullname))),
        SchemaType::Null
        | SchemaType::Map(_)
        | SchemaType::Union(_)
        | SchemaType::Enum(_)
        | SchemaType::Fixed(_) => Err(AppError::UnsupportedType(ty.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avro::RecordField;

    #[test]
    fn test_primitive_mapping() {
        let cases = vec![
            (SchemaType::Boolean, OpenApiType::Boolean),
            (SchemaType::Int, OpenApiType::Integer),
            (SchemaType::Long, OpenApiType::Integer),
            (SchemaType::Float, OpenApiType::Number),
            (SchemaType::Double, OpenApiType::Number),
            (SchemaType::Bytes, OpenApiType::Byte),
            (SchemaType::String, OpenApiType::String),
        ];

        let mut pending = Vec::new();
        for (input, expected) in cases {
            let res = map_type(&input, &mut pending).expect(input.type_name());
            assert_eq!(res, SchemaObject::typed(expected));
        }
        assert!(pending.is_empty());
    }

    #[test]
    fn test_record_reference_is_deferred() {
        let record = Arc::new(RecordSchema::new(
            "com.acme.Location",
            vec![RecordField::new("lat", SchemaType::Double)],
        ));
        let mut pending = Vec::new();

        let res = map_type(&SchemaType::Record(Arc::clone(&record)), &mut pending).unwrap();

        assert_eq!(res.reference.as_deref(), Some("#/definitions/Location"));
        assert!(res.properties.is_none());
        assert_eq!(pending.len(), 1);
        assert!(Arc::ptr_eq(&pending[0], &record));
    }

    #[test]
    fn test_nested_arrays() {
        let record = Arc::new(RecordSchema::new("Delivery", vec![]));
        let ty = SchemaType::Array(Box::new(SchemaType::Array(Box::new(SchemaType::Record(
            record,
        )))));
        let mut pending = Vec::new();

        let res = map_type(&ty, &mut pending).unwrap();

        let inner = res.items.expect("outer items");
        let innermost = inner.items.expect("inner items");
        assert_eq!(inner.type_, Some(OpenApiType::Array));
        assert_eq!(innermost.reference.as_deref(), Some("#/definitions/Delivery"));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_back_reference_is_not_enqueued() {
        let mut pending = Vec::new();
        let res = map_type(&SchemaType::Named("ns.Node".into()), &mut pending).unwrap();
        assert_eq!(res.reference.as_deref(), Some("#/definitions/Node"));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_unsupported_types() {
        let mut pending = Vec::new();
        for ty in [
            SchemaType::Null,
            SchemaType::Map(Box::new(SchemaType::String)),
            SchemaType::Union(vec![SchemaType::Null, SchemaType::String]),
            SchemaType::Enum("Suit".into()),
            SchemaType::Fixed("Md5".into()),
        ] {
            let err = map_type(&ty, &mut pending).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedType(_)), "{}", ty);
        }

        let err = map_type(
            &SchemaType::Array(Box::new(SchemaType::Enum("Suit".into()))),
            &mut pending,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported field type: enum:Suit");
    }
}
