mod file_ops;
pub mod types;

use std::path::Path;

use self::file_ops::FileOps;
pub use self::types::{HistoryEntry, HistoryError, SaveMode};

/// Append-only log of accepted input lines.
///
/// Entries are never removed or reordered; an entry's index is its
/// 1-based position.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a line, returning its index. Blank lines are ignored.
    pub fn record(&mut self, line: &str) -> Option<usize> {
        if line.trim().is_empty() {
            return None;
        }
        self.entries.push(line.to_owned());
        Some(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, text)| HistoryEntry {
                index: i + 1,
                text: text.as_str(),
            })
    }

    /// The last `min(count, len)` entries, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = HistoryEntry<'_>> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries().skip(skip)
    }

    /// Appends the non-blank lines of `path` to the log.
    ///
    /// A missing file is an error and leaves the log untouched.
    pub fn load(&mut self, path: &Path) -> Result<usize, HistoryError> {
        let loaded = FileOps::new(path).load_entries()?;
        let count = loaded.len();
        self.entries.extend(loaded);
        log::debug!("loaded {} history entries from {}", count, path.display());
        Ok(count)
    }

    /// Writes the whole log to `path`, then one blank line.
    pub fn save(&self, path: &Path, mode: SaveMode) -> Result<(), HistoryError> {
        FileOps::new(path).save_entries(self.entries.iter().map(String::as_str), mode)?;
        log::debug!(
            "saved {} history entries to {} ({:?})",
            self.entries.len(),
            path.display(),
            mode
        );
        Ok(())
    }

    /// Appends a single line to `path` without touching the in-memory log.
    pub fn persist_line(path: &Path, line: &str) -> Result<(), HistoryError> {
        FileOps::new(path).append_entry(line)
    }
}
