use std::path::Path;
use std::path::PathBuf;

/// Where a validation error was found.
///
/// `line` and `col` are relative to the file the offending definition was
/// parsed from. Validation runs on the merged document, which no longer
/// records that file, so `file` is `None` for every error the validator
/// produces. Rendered as `line:col`, or `file:line:col` when a file is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourcePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}
