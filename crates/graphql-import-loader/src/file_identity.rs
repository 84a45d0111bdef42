use std::path::Path;
use std::path::PathBuf;

/// Absolute path that uniquely identifies a loaded file.
///
/// Produced by a [`FileResolver`](crate::FileResolver); used both to register
/// build dependencies and to detect import cycles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileIdentity(PathBuf);
impl FileIdentity {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Directory context that imports written inside this file resolve
    /// against.
    pub fn dir(&self) -> &Path {
        self.0.parent().unwrap_or_else(|| Path::new("/"))
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
impl AsRef<Path> for FileIdentity {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
impl std::fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
