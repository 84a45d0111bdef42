use crate::ast;
use crate::ast::SyntaxError;
use crate::BuildContext;
use crate::FileIdentity;
use crate::FileResolver;
use crate::ImportDirective;
use crate::ImportSyntaxError;
use crate::ReadError;
use crate::ResolveError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ImportExpandError>;

/// Recursively splices the definitions of `#import`-ed files into a root
/// document.
///
/// Sibling imports are resolved, read and expanded concurrently, then joined
/// positionally: the merged document always lists the importing file's own
/// definitions first, followed by each import's (already expanded)
/// definitions in the order the directives appear.
///
/// Every resolved import is registered with the [`BuildContext`] as a
/// dependency, whether or not anything ends up using its fragments.
pub struct ImportExpander<'a> {
    build_context: &'a dyn BuildContext,
    resolver: &'a dyn FileResolver,
}
impl<'a> ImportExpander<'a> {
    pub fn new(
        resolver: &'a dyn FileResolver,
        build_context: &'a dyn BuildContext,
    ) -> Self {
        Self {
            build_context,
            resolver,
        }
    }

    /// Expand anonymous source text whose imports resolve against
    /// `context_dir`.
    pub async fn expand(
        &self,
        context_dir: &Path,
        source: &str,
    ) -> Result<ast::query::Document> {
        self.expand_source(None, context_dir.to_path_buf(), source.to_string(), vec![])
            .await
    }

    /// Expand the contents of `resource`. The resource itself counts as the
    /// first entry on the import path, so importing it again is a cycle.
    pub async fn expand_resource(
        &self,
        resource: &FileIdentity,
        source: &str,
    ) -> Result<ast::query::Document> {
        self.expand_source(
            Some(resource.clone()),
            resource.dir().to_path_buf(),
            source.to_string(),
            vec![resource.clone()],
        ).await
    }

    fn expand_source(
        &self,
        file: Option<FileIdentity>,
        context_dir: PathBuf,
        source: String,
        import_path: Vec<FileIdentity>,
    ) -> BoxFuture<'_, Result<ast::query::Document>> {
        async move {
            let file_path = file.as_ref().map(|f| f.path());
            let document = ast::parse_document(file_path, &source)?;

            let directives = crate::scan_import_directives(&source)
                .map_err(|err| ImportExpandError::ImportSyntaxError {
                    file: file_path.map(|p| p.to_path_buf()),
                    err,
                })?;

            if directives.is_empty() {
                return Ok(document);
            }

            log::debug!(
                "Expanding {} imports from {}...",
                directives.len(),
                file.as_ref()
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "<anonymous source>".to_string()),
            );

            let imported_docs = futures::future::try_join_all(
                directives.iter().map(|directive| {
                    self.expand_import(&context_dir, directive, &import_path)
                }),
            ).await?;

            let mut definitions = document.definitions;
            for imported_doc in imported_docs {
                definitions.extend(imported_doc.definitions);
            }

            Ok(ast::query::Document { definitions })
        }.boxed()
    }

    async fn expand_import(
        &self,
        context_dir: &Path,
        directive: &ImportDirective,
        import_path: &[FileIdentity],
    ) -> Result<ast::query::Document> {
        let file = self.resolver.resolve(context_dir, &directive.path)
            .await
            .map_err(|err| ImportExpandError::ImportResolutionError {
                context_dir: context_dir.to_path_buf(),
                import_path: directive.path.clone(),
                err,
            })?;
        log::trace!("Resolved import `{}` to {file}.", directive.path);

        self.build_context.add_dependency(&file);

        if let Some(cycle_start) = import_path.iter().position(|f| f == &file) {
            let mut cycle: Vec<PathBuf> = import_path[cycle_start..].iter()
                .map(|f| f.path().to_path_buf())
                .collect();
            cycle.push(file.into_path_buf());
            return Err(ImportExpandError::ImportCycleError { cycle });
        }

        let content = self.resolver.read_text(&file)
            .await
            .map_err(|err| ImportExpandError::ImportReadError(Box::new(err)))?;

        let mut child_import_path = import_path.to_vec();
        child_import_path.push(file.clone());

        let document = self.expand_source(
            Some(file.clone()),
            file.dir().to_path_buf(),
            content,
            child_import_path,
        ).await?;

        log::debug!(
            "Expanded {file} into {} definitions.",
            document.definitions.len(),
        );

        Ok(document)
    }
}

#[derive(Debug, Error)]
pub enum ImportExpandError {
    #[error("Import cycle detected: {}", display_cycle(.cycle))]
    ImportCycleError {
        cycle: Vec<PathBuf>,
    },

    #[error("{0}")]
    ImportReadError(Box<ReadError>),

    #[error("Unable to resolve import `{import_path}` from {}: {err}", .context_dir.display())]
    ImportResolutionError {
        context_dir: PathBuf,
        import_path: String,
        err: ResolveError,
    },

    #[error("{err}{}", in_file_suffix(.file))]
    ImportSyntaxError {
        file: Option<PathBuf>,
        err: ImportSyntaxError,
    },

    #[error(transparent)]
    SyntaxError(#[from] SyntaxError),
}

fn display_cycle(cycle: &[PathBuf]) -> String {
    cycle.iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn in_file_suffix(file: &Option<PathBuf>) -> String {
    match file {
        Some(file) => format!(" in {}", file.display()),
        None => String::new(),
    }
}
