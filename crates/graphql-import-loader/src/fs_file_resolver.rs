use crate::FileIdentity;
use crate::FileResolver;
use crate::ReadError;
use crate::ResolveError;
use crate::StatError;
use std::path::Path;
use std::time::SystemTime;

/// [`FileResolver`] backed by the local filesystem via `tokio::fs`.
///
/// Requests are joined onto the context directory and canonicalized, so
/// symlinked or `..`-laden paths to the same file share one identity.
#[derive(Clone, Debug, Default)]
pub struct FsFileResolver;
impl FsFileResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileResolver for FsFileResolver {
    async fn resolve(
        &self,
        context_dir: &Path,
        request: &str,
    ) -> Result<FileIdentity, ResolveError> {
        let candidate = context_dir.join(request);
        log::trace!("Resolving `{request}` to {candidate:#?}.");

        match tokio::fs::canonicalize(&candidate).await {
            Ok(path) => Ok(FileIdentity::new(path)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ResolveError::NotFound {
                    context_dir: context_dir.to_path_buf(),
                    request: request.to_string(),
                })
            },
            Err(err) => Err(ResolveError::Io {
                context_dir: context_dir.to_path_buf(),
                request: request.to_string(),
                err,
            }),
        }
    }

    async fn read_text(&self, file: &FileIdentity) -> Result<String, ReadError> {
        let file_path = file.path();
        let is_file = tokio::fs::metadata(file_path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(ReadError::PathIsNotAFile(file_path.to_path_buf()));
        }

        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|err| ReadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        let content = String::from_utf8(bytes)
            .map_err(|err| ReadError::FileDecodeError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        Ok(content)
    }

    async fn stat_mod_time(&self, file: &FileIdentity) -> Result<SystemTime, StatError> {
        let metadata = tokio::fs::metadata(file.path())
            .await
            .map_err(|err| StatError {
                file_path: file.path().to_path_buf(),
                err,
            })?;

        metadata.modified().map_err(|err| StatError {
            file_path: file.path().to_path_buf(),
            err,
        })
    }
}
