mod introspection;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_cache;

pub use schema::Schema;
pub use schema::SchemaField;
pub use schema::SchemaType;
pub use schema::TypeKind;
pub use schema_builder::SchemaBuilder;
pub use schema_cache::SchemaCache;

use crate::ReadError;
use crate::ResolveError;
use crate::StatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("Duplicate definition of type `{type_name}` in {}", .file.display())]
    DuplicateTypeDefinition {
        file: PathBuf,
        type_name: String,
    },

    #[error("Extension of undefined type `{type_name}` in {}", .file.display())]
    ExtensionOfUndefinedType {
        file: PathBuf,
        type_name: String,
    },

    #[error("Schema file {} is not valid introspection JSON: {message}", .file.display())]
    InvalidIntrospection {
        file: PathBuf,
        message: String,
    },

    #[error("Schema file {} is not valid JSON: {err}", .file.display())]
    InvalidJson {
        file: PathBuf,
        err: serde_json::Error,
    },

    #[error("Root operation type `{type_name}` in {} is not a defined object type", .file.display())]
    InvalidRootType {
        file: PathBuf,
        type_name: String,
    },

    #[error("`validate` is enabled but no `schema` option was provided")]
    NotConfigured,

    #[error("Unable to read schema file: {0}")]
    Read(#[from] ReadError),

    #[error("Unable to locate schema file: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to parse schema SDL in {}: {message}", .file.display())]
    SdlParseError {
        file: PathBuf,
        message: String,
    },

    #[error("{0}")]
    Stat(#[from] StatError),
}
