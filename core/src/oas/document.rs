#![deny(missing_docs)]

//! # Document Assembler
//!
//! Combines, in increasing priority:
//! 1. structural defaults (`swagger`, empty `info`/`host`/`basePath`, `https`,
//!    JSON content types),
//! 2. the generated `paths` and `definitions`,
//! 3. the caller template, deep merged on top.

use crate::error::{AppError, AppResult};
use crate::oas::definitions::{generate_definitions, CollisionPolicy};
use crate::oas::merge::deep_merge;
use crate::oas::models::Document;
use crate::oas::paths::generate_paths;
use crate::oas::RouteMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied document metadata.
///
/// Unknown fields are kept in `extra` and merged through verbatim, so they can
/// override anything generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Free-form `info` object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Map<String, Value>>,
    /// `host`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// `basePath`
    #[serde(
        rename = "basePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_path: Option<String>,
    /// `schemes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    /// Every other top-level field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Template {
    /// Converts the template into the JSON object merged over the document.
    pub fn to_value(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Options for a generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// How records sharing a short name are handled.
    pub collision_policy: CollisionPolicy,
}

/// Generates the complete document for a route map.
///
/// # Arguments
///
/// * `template` - A JSON object (or `null`) merged over the generated document.
/// * `routes` - Route name to parsed schema.
pub fn generate_document(template: &Value, routes: &RouteMap) -> AppResult<Value> {
    generate_document_with(template, routes, GeneratorOptions::default())
}

/// Same as [`generate_document`] with explicit options.
pub fn generate_document_with(
    template: &Value,
    routes: &RouteMap,
    options: GeneratorOptions,
) -> AppResult<Value> {
    let paths = generate_paths(routes)?;
    let definitions = generate_definitions(routes, options.collision_policy)?;
    debug!(
        "Generated {} paths and {} definitions",
        paths.len(),
        definitions.len()
    );

    assemble(Document::new(paths, definitions), template)
}

/// Merges the template over a generated document.
///
/// A `null` template leaves the document untouched.
pub fn assemble(document: Document, template: &Value) -> AppResult<Value> {
    ensure_template(template)?;
    let mut value = serde_json::to_value(document)?;
    if !template.is_null() {
        deep_merge(&mut value, template);
    }
    Ok(value)
}

fn ensure_template(template: &Value) -> AppResult<()> {
    match template {
        Value::Object(_) | Value::Null => Ok(()),
        other => Err(AppError::InvalidTemplate(format!(
            "Expected a JSON object, found {}",
            other
        ))),
    }
}
