pub mod ast;
mod build_context;
pub mod emitter;
mod file_identity;
mod file_resolver;
mod fragment_dedupe;
mod fs_file_resolver;
mod import_directive;
mod import_expander;
pub mod loc;
mod loader;
mod loader_options;
pub mod schema;
mod selection_visitor;
mod unused_fragment_pruner;
pub mod validation;

pub use build_context::BuildContext;
pub use build_context::RecordingBuildContext;
pub use file_identity::FileIdentity;
pub use file_resolver::FileResolver;
pub use file_resolver::ReadError;
pub use file_resolver::ResolveError;
pub use file_resolver::StatError;
pub use fragment_dedupe::dedupe_fragments;
pub use fs_file_resolver::FsFileResolver;
pub use import_directive::scan_import_directives;
pub use import_directive::ImportDirective;
pub use import_directive::ImportSyntaxError;
pub use import_expander::ImportExpander;
pub use import_expander::ImportExpandError;
pub use loader::Loader;
pub use loader::LoaderError;
pub use loader_options::LoaderOptions;
pub use loader_options::LoaderOptionsError;
pub use loader_options::OutputKind;
pub use selection_visitor::collect_fragment_spread_names;
pub use selection_visitor::fragments_reachable_from_operations;
pub use unused_fragment_pruner::remove_unused_fragments;

#[cfg(test)]
mod tests;
