use crate::FileIdentity;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;

/// Host-provided access to the files a compilation unit depends on.
///
/// The loader never touches the filesystem directly: import paths, schema
/// paths, file contents and modification times all go through this trait.
#[async_trait::async_trait]
pub trait FileResolver: Send + Sync {
    /// Resolve `request` (as written in an `#import` directive or in the
    /// `schema` option) relative to `context_dir`.
    async fn resolve(
        &self,
        context_dir: &Path,
        request: &str,
    ) -> Result<FileIdentity, ResolveError>;

    async fn read_text(&self, file: &FileIdentity) -> Result<String, ReadError>;

    async fn stat_mod_time(&self, file: &FileIdentity) -> Result<SystemTime, StatError>;
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unable to resolve `{request}` from {}", .context_dir.display())]
    NotFound {
        context_dir: PathBuf,
        request: String,
    },

    #[error("I/O error while resolving `{request}` from {}: {err}", .context_dir.display())]
    Io {
        context_dir: PathBuf,
        request: String,
        err: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File at {} is not valid UTF-8: {err}", .file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {}: {err}", .file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Path is not a file: {}", .0.display())]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadError {
    fn eq(&self, other: &Self) -> bool {
        use ReadError::*;
        match (self, other) {
            (FileDecodeError {
                file_path: self_file_path,
                err: self_err,
            }, FileDecodeError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path.eq(other_file_path)
                && self_err.eq(other_err)
            },

            (FileReadError {
                file_path: self_file_path,
                err: self_err,
            }, FileReadError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err.kind() == other_err.kind()
            },

            (PathIsNotAFile(self_path), PathIsNotAFile(other_path)) => {
                self_path.eq(other_path)
            },

            _ => false,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unable to read modification time of {}: {err}", .file_path.display())]
pub struct StatError {
    pub file_path: PathBuf,
    pub err: std::io::Error,
}
