use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::PathBuf,
};

use super::types::{HistoryError, SaveMode};

/// Plain-text history file: one command per line, no header.
pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Non-blank lines of the file, in file order.
    pub fn load_entries(&self) -> Result<Vec<String>, HistoryError> {
        let file = File::open(&self.file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HistoryError::FileNotFound(self.file_path.clone()),
            _ => self.io_error(e),
        })?;

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_error(e))?;
            if !line.trim().is_empty() {
                entries.push(line);
            }
        }
        Ok(entries)
    }

    /// Writes every entry followed by a single blank separator line.
    pub fn save_entries<'a, I>(&self, entries: I, mode: SaveMode) -> Result<(), HistoryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut options = OpenOptions::new();
        match mode {
            SaveMode::Append => options.append(true),
            SaveMode::Truncate => options.write(true).truncate(true),
        };
        let file = options
            .create(true)
            .open(&self.file_path)
            .map_err(|e| self.io_error(e))?;

        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry).map_err(|e| self.io_error(e))?;
        }
        writeln!(writer).map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))
    }

    pub fn append_entry(&self, entry: &str) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
            .map_err(|e| self.io_error(e))?;

        writeln!(file, "{}", entry).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}
