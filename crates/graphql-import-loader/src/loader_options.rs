use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// What the emitted module exports.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// The printed document text.
    #[default]
    String,
    /// The document tree as a JSON AST.
    Document,
}

/// Per-unit loader configuration, as supplied by the bundler.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Schema file (introspection `.json` or SDL), resolved against the
    /// build's root context. Only read when `validate` is set.
    pub schema: Option<PathBuf>,
    pub validate: bool,
    pub remove_unused_fragments: bool,
    /// Collapse whitespace in `string` output. Ignored for `document` output.
    pub minify: bool,
    /// Emit `export default ...` instead of `module.exports = ...`.
    pub emit_default_export: bool,
    pub output: OutputKind,
}
impl LoaderOptions {
    pub fn from_json_str(json: &str) -> Result<Self, LoaderOptionsError> {
        let options: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(LoaderOptionsError::Invalid)?;
        Self::from_json_object(options)
    }

    /// Options must be a JSON object; arrays are not read as positional
    /// fields.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self, LoaderOptionsError> {
        let options: serde_json::Map<String, serde_json::Value> =
            serde_json::from_value(json).map_err(LoaderOptionsError::Invalid)?;
        Self::from_json_object(options)
    }

    fn from_json_object(
        options: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, LoaderOptionsError> {
        serde_json::from_value(serde_json::Value::Object(options))
            .map_err(LoaderOptionsError::Invalid)
    }
}

#[derive(Debug, Error)]
pub enum LoaderOptionsError {
    #[error("Invalid loader options: {0}")]
    Invalid(serde_json::Error),
}
