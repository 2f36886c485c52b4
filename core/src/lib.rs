#![deny(missing_docs)]

//! # Avro OpenAPI Core
//!
//! Translates named Avro record schemas into a single OpenAPI 2.0 (Swagger)
//! document: one `POST /{route}` path per schema and a `definitions` map with
//! one object definition per distinct record.
//!
//! ```
//! use avro_openapi_core::{generate_document, parse_schema, RouteMap};
//! use serde_json::json;
//!
//! let ping = parse_schema(&json!({
//!     "type": "record",
//!     "name": "ns.Ping",
//!     "fields": [{ "name": "id", "type": "string" }]
//! }))?;
//!
//! let mut routes = RouteMap::new();
//! routes.insert("Ping".to_string(), ping);
//!
//! let doc = generate_document(&json!({ "host": "example.com" }), &routes)?;
//! assert_eq!(doc["paths"]["/Ping"]["post"]["parameters"][0]["schema"]["$ref"], "#/definitions/Ping");
//! # Ok::<(), avro_openapi_core::AppError>(())
//! ```

/// Shared error types.
pub mod error;

/// Avro schema model and reader.
pub mod avro;

/// Type mapping logic (Avro -> Swagger).
pub mod type_mapping;

/// OpenAPI 2.0 document generation.
pub mod oas;

/// actix-web handler serving the generated document.
#[cfg(feature = "server")]
pub mod server;

pub use avro::{parse_schema, parse_schema_str, RecordField, RecordSchema, SchemaType};
pub use error::{AppError, AppResult};
pub use oas::{
    generate_definitions, generate_document, generate_document_with, generate_paths,
    CollisionPolicy, GeneratorOptions, RouteMap, Template,
};
#[cfg(feature = "server")]
pub use server::{generate_v2, DocumentHandler};
pub use type_mapping::map_type;
