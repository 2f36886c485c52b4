#![deny(missing_docs)]

//! # Record Definition Collector
//!
//! Walks every record reachable from a route's root record and produces one
//! `definitions` entry per distinct record.
//!
//! Nested records are not expanded recursively. The type mapper emits a `$ref`
//! and pushes the record onto a work stack which is drained after the root has
//! been translated. Every pop appends an entry, even for a record already
//! translated, so the last sighting of a shared record follows everything that
//! references it. Collected entries are reversed before they are folded into
//! the final map so that, read top to bottom, a record's dependencies appear no
//! later than the record itself.

use crate::avro::{RecordField, RecordSchema, SchemaType};
use crate::error::{AppError, AppResult};
use crate::oas::models::{Definitions, SchemaObject, RESPONSE_RECORD_NAME};
use crate::oas::paths::route_record;
use crate::oas::RouteMap;
use crate::type_mapping::map_type;
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// How to handle two different records that share a short name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fail with `AppError::DefinitionCollision`.
    #[default]
    Reject,
    /// Keep the first collected definition and drop the rest.
    Overwrite,
}

/// One row of the eventual `definitions` map.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionEntry {
    /// Record short name.
    pub name: String,
    /// Object definition.
    pub value: SchemaObject,
}

/// A record already present in the output, keyed by short name in the arena.
#[derive(Debug)]
struct Collected {
    record: Arc<RecordSchema>,
    value: SchemaObject,
}

/// Bookkeeping for a single document generation.
///
/// Created fresh for every generation call and consumed by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct GenerationState {
    definitions: Vec<DefinitionEntry>,
    refs: Vec<Arc<RecordSchema>>,
    arena: HashMap<String, Collected>,
    policy: CollisionPolicy,
}

impl GenerationState {
    /// Creates an empty state.
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Collects the definitions of a route's root record and everything it references.
    ///
    /// # Arguments
    ///
    /// * `root` - The record bound to the route.
    pub fn collect_route(&mut self, root: &Arc<RecordSchema>) -> AppResult<()> {
        if root.short_name() == RESPONSE_RECORD_NAME {
            return Err(AppError::NameCollision(RESPONSE_RECORD_NAME.to_string()));
        }

        // The root is expanded in place, never through a `$ref`.
        self.collect_record(Arc::clone(root))?;

        while let Some(record) = self.refs.pop() {
            self.collect_record(record)?;
        }

        Ok(())
    }

    /// Entries collected so far, in collection order.
    pub fn entries(&self) -> &[DefinitionEntry] {
        &self.definitions
    }

    /// Appends the response envelope and builds the ordered `definitions` map.
    pub fn finish(mut self) -> AppResult<Definitions> {
        let response = response_record();
        let value = record_definition(&response, &mut self.refs)?;
        self.definitions.push(DefinitionEntry {
            name: RESPONSE_RECORD_NAME.to_string(),
            value,
        });

        // Later entries overwrite earlier ones but keep the key's first position.
        let mut definitions = IndexMap::with_capacity(self.definitions.len());
        for entry in self.definitions.into_iter().rev() {
            definitions.insert(entry.name, entry.value);
        }
        Ok(definitions)
    }

    fn collect_record(&mut self, record: Arc<RecordSchema>) -> AppResult<()> {
        let name = record.short_name().to_string();
        if name == RESPONSE_RECORD_NAME {
            return Err(AppError::NameCollision(RESPONSE_RECORD_NAME.to_string()));
        }

        if let Some(existing) = self.arena.get(&name) {
            if Arc::ptr_eq(&existing.record, &record) {
                trace!("Definition '{}' already collected", name);
                let value = existing.value.clone();
                self.definitions.push(DefinitionEntry { name, value });
                return Ok(());
            }
        }

        let value = record_definition(&record, &mut self.refs)?;

        match self.arena.get(&name) {
            None => {
                debug!("Collected definition '{}' from '{}'", name, record.fullname);
                self.arena.insert(
                    name.clone(),
                    Collected {
                        record,
                        value: value.clone(),
                    },
                );
                self.definitions.push(DefinitionEntry { name, value });
            }
            Some(existing) if existing.value == value => {
                trace!(
                    "Definition '{}' from '{}' matches '{}'",
                    name,
                    record.fullname,
                    existing.record.fullname
                );
                self.definitions.push(DefinitionEntry { name, value });
            }
            Some(existing) => match self.policy {
                CollisionPolicy::Reject => {
                    return Err(AppError::DefinitionCollision {
                        name,
                        existing: existing.record.fullname.clone(),
                        incoming: record.fullname.clone(),
                    });
                }
                CollisionPolicy::Overwrite => {
                    warn!(
                        "Definition '{}' from '{}' is shadowed by '{}'",
                        name, record.fullname, existing.record.fullname
                    );
                    self.definitions.push(DefinitionEntry { name, value });
                }
            },
        }

        Ok(())
    }
}

/// Translates a record into its full object definition.
///
/// Nested records referenced by the fields are pushed onto `pending`.
pub fn record_definition(
    record: &RecordSchema,
    pending: &mut Vec<Arc<RecordSchema>>,
) -> AppResult<SchemaObject> {
    let mut properties = IndexMap::with_capacity(record.fields.len());
    for field in &record.fields {
        let schema = map_type(&field.schema, pending).map_err(|e| match e {
            AppError::UnsupportedType(ty) => AppError::UnsupportedType(format!(
                "{} (field '{}' of '{}')",
                ty, field.name, record.fullname
            )),
            other => other,
        })?;
        properties.insert(field.name.clone(), schema);
    }
    Ok(SchemaObject::object(properties))
}

/// The synthesized record every operation responds with.
pub fn response_record() -> RecordSchema {
    RecordSchema::new(
        RESPONSE_RECORD_NAME,
        vec![RecordField::new("id", SchemaType::String)],
    )
    .with_doc(RESPONSE_RECORD_NAME)
}

/// Collects the `definitions` map for every route.
///
/// # Arguments
///
/// * `routes` - Route name to parsed schema.
/// * `policy` - What to do when different records share a short name.
pub fn generate_definitions(routes: &RouteMap, policy: CollisionPolicy) -> AppResult<Definitions> {
    let mut state = GenerationState::new(policy);
    for (route, schema) in routes {
        let root = route_record(route, schema)?;
        state.collect_route(root)?;
    }
    state.finish()
}
