#![deny(missing_docs)]

//! # OpenAPI 2.0 Generation Module
//!
//! - **models**: Serializable Swagger 2.0 document types.
//! - **definitions**: Record definition collector.
//! - **paths**: One `POST` operation per route.
//! - **document**: Defaults, generated parts and caller template.
//! - **merge**: Deep merge used for the template.

use crate::avro::SchemaType;
use indexmap::IndexMap;

pub mod definitions;
pub mod document;
pub mod merge;
pub mod models;
pub mod paths;

/// Route name to parsed schema, in caller order.
pub type RouteMap = IndexMap<String, SchemaType>;

pub use definitions::{generate_definitions, CollisionPolicy, DefinitionEntry, GenerationState};
pub use document::{assemble, generate_document, generate_document_with, GeneratorOptions, Template};
pub use models::{Definitions, Document, OpenApiType, Paths, SchemaObject};
pub use paths::generate_paths;
