mod document_json;
mod minify;

pub use document_json::document_to_json;
pub use minify::minify;

use crate::ast;
use crate::LoaderOptions;
use crate::OutputKind;

/// Canonical GraphQL text for `doc`.
pub fn print_document(doc: &ast::query::Document) -> String {
    doc.to_string()
}

/// Wraps the finished document as the module source handed back to the
/// bundler: `export default <json>` or `module.exports = <json>`.
pub fn emit_module(doc: &ast::query::Document, options: &LoaderOptions) -> String {
    let payload = match options.output {
        OutputKind::String => {
            let printed = print_document(doc);
            let printed =
                if options.minify {
                    minify(&printed)
                } else {
                    printed
                };
            serde_json::Value::String(printed).to_string()
        },
        OutputKind::Document => document_to_json(doc).to_string(),
    };

    if options.emit_default_export {
        format!("export default {payload}")
    } else {
        format!("module.exports = {payload}")
    }
}
