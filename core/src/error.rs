//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every generation failure is fatal to the call that produced it: no partial
/// document is ever returned alongside an error.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML (de)serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A source record uses the name reserved for the synthesized response record.
    #[from(ignore)]
    #[display("Schema record name clashes with the generated response record name {_0}")]
    NameCollision(String),

    /// A field type has no entry in the type mapper table.
    #[from(ignore)]
    #[display("Unsupported field type: {_0}")]
    UnsupportedType(String),

    /// Two different records translate to the same definition name.
    #[from(ignore)]
    #[display("Definition '{name}' is produced by both '{existing}' and '{incoming}'")]
    DefinitionCollision {
        /// Short name used as the `definitions` key.
        name: String,
        /// Full name of the record collected first.
        existing: String,
        /// Full name of the record that clashed with it.
        incoming: String,
    },

    /// The Avro schema could not be read, or is not usable as a route schema.
    #[from(ignore)]
    #[display("Invalid Schema: {_0}")]
    InvalidSchema(String),

    /// The caller-supplied document template is not a JSON object.
    #[from(ignore)]
    #[display("Invalid Template: {_0}")]
    InvalidTemplate(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
