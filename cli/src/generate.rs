#![deny(missing_docs)]

//! # Generate Command
//!
//! Builds the OpenAPI 2.0 document described by a manifest and writes it to
//! stdout or a file.

use crate::error::CliResult;
use crate::manifest::{self, extension};
use avro_openapi_core::{generate_document_with, AppError, CollisionPolicy, GeneratorOptions};
use log::info;
use std::fs;
use std::path::PathBuf;

/// What to do when two different records share a short name.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnCollision {
    /// Fail the generation.
    #[default]
    Reject,
    /// Keep the first definition collected.
    Overwrite,
}

impl From<OnCollision> for GeneratorOptions {
    fn from(value: OnCollision) -> Self {
        let collision_policy = match value {
            OnCollision::Reject => CollisionPolicy::Reject,
            OnCollision::Overwrite => CollisionPolicy::Overwrite,
        };
        GeneratorOptions { collision_policy }
    }
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the manifest (YAML or JSON) listing routes and the template.
    #[clap(long, env = "AVRO_OPENAPI_MANIFEST")]
    pub manifest: PathBuf,

    /// Output path for the document.
    /// Supports .json and .yaml/.yml extensions.
    /// If not provided, prints JSON to stdout.
    #[clap(long, env = "AVRO_OPENAPI_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Handling of different records sharing a short name.
    #[clap(long, value_enum, default_value_t, env = "AVRO_OPENAPI_ON_COLLISION")]
    pub on_collision: OnCollision,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let loaded = manifest::load(&args.manifest)?;
    info!(
        "Generating document for {} route(s) from {:?}",
        loaded.routes.len(),
        args.manifest
    );

    let document = generate_document_with(&loaded.template, &loaded.routes, args.on_collision.into())?;

    let output_str = match args.output.as_deref().map(extension) {
        Some("yaml" | "yml") => serde_yaml::to_string(&document).map_err(AppError::from)?,
        _ => serde_json::to_string_pretty(&document).map_err(AppError::from)?,
    };

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(out_path, output_str)?;
        info!("Document generated at {:?}", out_path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    const QUESTION: &str = r#"{
        "type": "record",
        "name": "com.example.Question",
        "doc": "A question to ask.",
        "fields": [
            { "name": "id", "type": "string" },
            {
                "name": "location",
                "type": {
                    "type": "record",
                    "name": "Location",
                    "fields": [{ "name": "lat", "type": "double" }]
                }
            }
        ]
    }"#;

    fn write_manifest(dir: &std::path::Path, routes: &str) -> PathBuf {
        fs::write(dir.join("question.avsc"), QUESTION).unwrap();
        let manifest = dir.join("manifest.yaml");
        fs::write(
            &manifest,
            format!(
                "template:\n  host: test.com\n  basePath: /api\nroutes:\n{}",
                routes
            ),
        )
        .unwrap();
        manifest
    }

    #[test]
    fn test_generate_json_file() {
        let dir = tempdir().unwrap();
        let manifest = write_manifest(dir.path(), "  Ask: question.avsc\n");
        let out_path = dir.path().join("out/swagger.json");

        execute(&GenerateArgs {
            manifest,
            output: Some(out_path.clone()),
            on_collision: OnCollision::Reject,
        })
        .unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(doc["host"], json!("test.com"));
        assert_eq!(doc["basePath"], json!("/api"));
        assert_eq!(
            doc["paths"]["/Ask"]["post"]["parameters"][0]["description"],
            json!("A question to ask.")
        );
        let definitions: Vec<&str> = doc["definitions"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(definitions, vec!["Response", "Location", "Question"]);
    }

    #[test]
    fn test_generate_yaml_file() {
        let dir = tempdir().unwrap();
        let manifest = write_manifest(dir.path(), "  Ask: question.avsc\n");
        let out_path = dir.path().join("swagger.yaml");

        execute(&GenerateArgs {
            manifest,
            output: Some(out_path.clone()),
            on_collision: OnCollision::default(),
        })
        .unwrap();

        let yaml_content = fs::read_to_string(&out_path).unwrap();
        assert!(yaml_content.contains("swagger: '2.0'"));
        assert!(yaml_content.contains("operationId: Ask"));
        assert!(yaml_content.contains("$ref: '#/definitions/Location'"));
    }

    #[test]
    fn test_generate_fails_on_reserved_name() {
        let dir = tempdir().unwrap();
        let manifest = write_manifest(
            dir.path(),
            "  Reply:\n    type: record\n    name: Response\n    fields: []\n",
        );
        let out_path = dir.path().join("swagger.json");

        let err = execute(&GenerateArgs {
            manifest,
            output: Some(out_path.clone()),
            on_collision: OnCollision::Reject,
        })
        .unwrap_err();

        assert!(matches!(err, CliError::App(AppError::NameCollision(_))));
        assert!(!out_path.exists(), "no document is written on failure");
    }

    #[test]
    fn test_on_collision_maps_to_policy() {
        let options: GeneratorOptions = OnCollision::Overwrite.into();
        assert_eq!(options.collision_policy, CollisionPolicy::Overwrite);
        let options: GeneratorOptions = OnCollision::default().into();
        assert_eq!(options.collision_policy, CollisionPolicy::Reject);
    }
}
