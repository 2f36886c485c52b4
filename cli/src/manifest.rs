#![deny(missing_docs)]

//! # Manifest
//!
//! A manifest names the routes to publish and the template merged over the
//! generated document. YAML (`.yaml`/`.yml`) and JSON are accepted.
//!
//! ```yaml
//! template:
//!   info: { title: Events, version: 1.0.0 }
//!   host: api.example.com
//! routes:
//!   Ping: schemas/ping.avsc        # relative to the manifest
//!   Pong:                          # or inline
//!     type: record
//!     name: com.example.Pong
//!     fields: [{ name: id, type: string }]
//! ```

use avro_openapi_core::{parse_schema, parse_schema_str, AppError, AppResult, RouteMap, Template};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a route's Avro schema comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RouteSource {
    /// Path to an `.avsc` file, relative to the manifest.
    File(PathBuf),
    /// The schema itself.
    Inline(Value),
}

/// The manifest file as written.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Metadata merged over the generated document.
    #[serde(default)]
    pub template: Template,
    /// Route name to schema source.
    pub routes: IndexMap<String, RouteSource>,
}

/// A manifest with every schema parsed.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// Template as a JSON object.
    pub template: Value,
    /// Parsed routes.
    pub routes: RouteMap,
}

/// Reads a manifest and parses every schema it names.
///
/// # Arguments
///
/// * `path` - Path to the manifest file.
pub fn load(path: &Path) -> AppResult<LoadedManifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::General(format!("Failed to read manifest {:?}: {}", path, e))
    })?;

    let manifest: Manifest = match extension(path) {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut routes = RouteMap::with_capacity(manifest.routes.len());
    for (route, source) in manifest.routes {
        let schema = match source {
            RouteSource::File(file) => {
                let file = base_dir.join(file);
                debug!("Reading schema for route '{}' from {:?}", route, file);
                let content = fs::read_to_string(&file).map_err(|e| {
                    AppError::General(format!("Failed to read schema {:?}: {}", file, e))
                })?;
                parse_schema_str(&content)?
            }
            RouteSource::Inline(value) => parse_schema(&value)?,
        };
        routes.insert(route, schema);
    }

    Ok(LoadedManifest {
        template: manifest.template.to_value()?,
        routes,
    })
}

/// File extension, or an empty string.
pub fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PING: &str = r#"{
        "type": "record",
        "name": "com.example.Ping",
        "fields": [{ "name": "id", "type": "string" }]
    }"#;

    #[test]
    fn test_load_yaml_with_file_and_inline_routes() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("schemas")).unwrap();
        fs::write(dir.path().join("schemas/ping.avsc"), PING).unwrap();

        let manifest_path = dir.path().join("manifest.yaml");
        fs::write(
            &manifest_path,
            r#"
template:
  info:
    title: Events
    version: 1.0.0
  host: api.example.com
routes:
  Ping: schemas/ping.avsc
  Pong:
    type: record
    name: com.example.Pong
    fields:
      - name: count
        type: long
"#,
        )
        .unwrap();

        let loaded = load(&manifest_path).unwrap();

        let routes: Vec<&str> = loaded.routes.keys().map(String::as_str).collect();
        assert_eq!(routes, vec!["Ping", "Pong"]);
        assert_eq!(
            loaded.routes["Pong"].as_record().unwrap().fullname,
            "com.example.Pong"
        );
        assert_eq!(loaded.template["host"], "api.example.com");
        assert_eq!(loaded.template["info"]["title"], "Events");
        assert!(loaded.template.get("basePath").is_none());
    }

    #[test]
    fn test_load_json_without_template() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ping.avsc"), PING).unwrap();
        let manifest_path = dir.path().join("manifest.json");
        fs::write(&manifest_path, r#"{ "routes": { "Ping": "ping.avsc" } }"#).unwrap();

        let loaded = load(&manifest_path).unwrap();
        assert_eq!(loaded.routes.len(), 1);
        assert_eq!(loaded.template, serde_json::json!({}));
    }

    #[test]
    fn test_missing_schema_file() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join("manifest.json");
        fs::write(&manifest_path, r#"{ "routes": { "Ping": "missing.avsc" } }"#).unwrap();

        match load(&manifest_path).unwrap_err() {
            AppError::General(msg) => assert!(msg.contains("Failed to read schema")),
            other => panic!("Wrong error type: {}", other),
        }
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
