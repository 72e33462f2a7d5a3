use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes filesystem paths for argument words.
#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_incomplete(incomplete);
        let search_dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir.clone()
        };

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(&prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let shown = dir.join(&name).to_string_lossy().into_owned();
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", shown),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", shown),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `"src/ma"` into (`"src"`, `"ma"`) and `"src/"` into (`"src"`, `""`).
fn split_incomplete(incomplete: &str) -> (PathBuf, String) {
    match incomplete.rfind('/') {
        Some(0) => (PathBuf::from("/"), incomplete[1..].to_string()),
        Some(i) => (Path::new(&incomplete[..i]).to_path_buf(), incomplete[i + 1..].to_string()),
        None => (PathBuf::new(), incomplete.to_string()),
    }
}
