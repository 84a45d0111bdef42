use crate::ast;
use crate::emitter;
use crate::schema::Schema;
use crate::schema::SchemaCache;
use crate::schema::SchemaLoadError;
use crate::validation;
use crate::BuildContext;
use crate::FileIdentity;
use crate::FileResolver;
use crate::ImportExpander;
use crate::ImportExpandError;
use crate::LoaderOptions;
use crate::LoaderOptionsError;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, LoaderError>;

/// A build or watch session.
///
/// Owns the [`FileResolver`] used for every unit and the [`SchemaCache`]
/// shared between them, so a schema is rebuilt only when its file changes.
/// Dropping the loader drops the cache.
pub struct Loader<R: FileResolver> {
    resolver: R,
    schema_cache: SchemaCache,
}
impl<R: FileResolver> Loader<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            schema_cache: SchemaCache::new(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn schema_cache(&self) -> &SchemaCache {
        &self.schema_cache
    }

    /// Run the whole pipeline for one compilation unit and return the module
    /// source to hand back to the bundler.
    ///
    /// Import expansion, then fragment dedupe, then (optionally) unused
    /// fragment removal, then (optionally) validation, then emission. Any
    /// fatal error aborts the unit before anything is emitted. Validation
    /// errors are reported through `build_context` and do not abort.
    pub async fn load(
        &self,
        resource: &FileIdentity,
        source: &str,
        options: &LoaderOptions,
        build_context: &dyn BuildContext,
    ) -> Result<String> {
        let schema =
            if options.validate {
                Some(self.load_schema(options, build_context).await?)
            } else {
                None
            };

        let document = self.transform(resource, source, options, build_context).await?;

        if let Some(schema) = schema {
            let errors = validation::validate(&schema, &document);
            log::debug!("Validation of {resource} found {} errors.", errors.len());
            for error in &errors {
                log::warn!("{resource}:{}: {error}", error.location());
                build_context.emit_error(error);
            }
        }

        Ok(emitter::emit_module(&document, options))
    }

    /// [`Loader::load`] with options given as a JSON object.
    pub async fn load_with_json_options(
        &self,
        resource: &FileIdentity,
        source: &str,
        options: serde_json::Value,
        build_context: &dyn BuildContext,
    ) -> Result<String> {
        let options = LoaderOptions::from_json_value(options)?;
        self.load(resource, source, &options, build_context).await
    }

    /// The document-level part of the pipeline: expansion, dedupe and
    /// (when enabled) unused fragment removal.
    pub async fn transform(
        &self,
        resource: &FileIdentity,
        source: &str,
        options: &LoaderOptions,
        build_context: &dyn BuildContext,
    ) -> Result<ast::query::Document> {
        let expander = ImportExpander::new(&self.resolver, build_context);
        let document = expander.expand_resource(resource, source).await?;
        log::debug!(
            "Expanded {resource} into {} definitions.",
            document.definitions.len(),
        );

        let document = crate::dedupe_fragments(&document);

        if options.remove_unused_fragments {
            let num_before = document.definitions.len();
            let document = crate::remove_unused_fragments(&document);
            log::debug!(
                "Removed {} unused fragments from {resource}.",
                num_before - document.definitions.len(),
            );
            return Ok(document);
        }

        Ok(document)
    }

    async fn load_schema(
        &self,
        options: &LoaderOptions,
        build_context: &dyn BuildContext,
    ) -> std::result::Result<Arc<Schema>, SchemaLoadError> {
        let Some(schema_path) = &options.schema else {
            return Err(SchemaLoadError::NotConfigured);
        };

        let schema_file = self.resolver.resolve(
            build_context.root_context(),
            &schema_path.to_string_lossy(),
        ).await?;
        build_context.add_dependency(&schema_file);

        self.schema_cache.load(&self.resolver, &schema_file).await
    }
}

/// Everything that aborts a compilation unit.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Expand(#[from] ImportExpandError),

    #[error(transparent)]
    Options(#[from] LoaderOptionsError),

    #[error(transparent)]
    SchemaLoad(#[from] SchemaLoadError),
}
