use crate::validation::ValidationError;
use crate::FileIdentity;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

/// The bundler-facing side of a single compilation unit.
///
/// Implementations forward dependencies and diagnostics to whatever build
/// system hosts the loader.
pub trait BuildContext: Send + Sync {
    /// Directory that relative option paths (such as `schema`) resolve
    /// against.
    fn root_context(&self) -> &Path;

    /// Register `file` as an input of the unit being compiled.
    fn add_dependency(&self, file: &FileIdentity);

    /// Report a non-fatal diagnostic.
    fn emit_error(&self, error: &ValidationError);
}

/// A [`BuildContext`] that records everything it is told.
///
/// Useful for hosts that collect results after the fact, and for tests.
#[derive(Debug)]
pub struct RecordingBuildContext {
    dependencies: Mutex<Vec<FileIdentity>>,
    errors: Mutex<Vec<ValidationError>>,
    root_context: PathBuf,
}
impl RecordingBuildContext {
    pub fn new(root_context: impl Into<PathBuf>) -> Self {
        Self {
            dependencies: Mutex::new(vec![]),
            errors: Mutex::new(vec![]),
            root_context: root_context.into(),
        }
    }

    /// Dependencies registered so far, in registration order.
    pub fn dependencies(&self) -> Vec<FileIdentity> {
        match self.dependencies.lock() {
            Ok(deps) => deps.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[inherent::inherent]
impl BuildContext for RecordingBuildContext {
    pub fn root_context(&self) -> &Path {
        self.root_context.as_path()
    }

    pub fn add_dependency(&self, file: &FileIdentity) {
        let mut deps = match self.dependencies.lock() {
            Ok(deps) => deps,
            Err(poisoned) => poisoned.into_inner(),
        };
        deps.push(file.clone());
    }

    pub fn emit_error(&self, error: &ValidationError) {
        let mut errors = match self.errors.lock() {
            Ok(errors) => errors,
            Err(poisoned) => poisoned.into_inner(),
        };
        errors.push(error.clone());
    }
}
