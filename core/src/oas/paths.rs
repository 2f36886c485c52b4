#![deny(missing_docs)]

//! # Path Builder
//!
//! Builds one `POST /{route}` operation per route. The body parameter
//! references the route's record definition and the `200` response references
//! the synthesized `Response` definition.

use crate::avro::{RecordSchema, SchemaType};
use crate::error::{AppError, AppResult};
use crate::oas::models::{
    Operation, Parameter, PathItem, Paths, ResponseObject, SchemaObject, RESPONSE_RECORD_NAME,
};
use crate::oas::RouteMap;
use indexmap::IndexMap;
use std::sync::Arc;

/// Returns the record bound to a route.
///
/// Routes must be bound to records; any other top-level type is rejected.
pub fn route_record<'a>(route: &str, schema: &'a SchemaType) -> AppResult<&'a Arc<RecordSchema>> {
    schema.as_record().ok_or_else(|| {
        AppError::InvalidSchema(format!(
            "Route '{}' must be bound to a record, found '{}'",
            route,
            schema.type_name()
        ))
    })
}

/// Builds the path item for a single route.
///
/// # Arguments
///
/// * `route` - Route name, used as the path segment and `operationId`.
/// * `record` - The record posted to the route.
pub fn build_path_item(route: &str, record: &RecordSchema) -> PathItem {
    let record_name = record.short_name();

    let mut responses = IndexMap::new();
    responses.insert(
        "200".to_string(),
        ResponseObject {
            description: format!("{} response", route),
            schema: Some(SchemaObject::reference(RESPONSE_RECORD_NAME)),
        },
    );
    responses.insert(
        "default".to_string(),
        ResponseObject {
            description: "Error".to_string(),
            schema: None,
        },
    );

    PathItem {
        post: Operation {
            description: format!("Raise a {} event.", record_name),
            operation_id: route.to_string(),
            parameters: vec![Parameter {
                name: record_name.to_string(),
                in_: "body".to_string(),
                description: record.doc.clone(),
                required: true,
                schema: SchemaObject::reference(record_name),
            }],
            responses,
        },
    }
}

/// Builds `paths` for every route, keyed by `/{route}`.
pub fn generate_paths(routes: &RouteMap) -> AppResult<Paths> {
    let mut paths = Paths::with_capacity(routes.len());
    for (route, schema) in routes {
        let record = route_record(route, schema)?;
        paths.insert(format!("/{}", route), build_path_item(route, record));
    }
    Ok(paths)
}
