use std::path::PathBuf;

/// One recorded line with its 1-based position in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry<'a> {
    pub index: usize,
    pub text: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("{}: history file not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a save treats existing file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Append,
    Truncate,
}
