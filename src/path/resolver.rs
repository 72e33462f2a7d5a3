use std::collections::BTreeSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Looks up executables in the directories listed by a PATH value.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    search_path: Option<OsString>,
}

impl PathResolver {
    pub fn new(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Captures the `PATH` of the current process.
    pub fn from_env() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    /// Directories to search, left to right. Empty entries are skipped.
    pub fn directories(&self) -> Vec<PathBuf> {
        match &self.search_path {
            Some(value) => env::split_paths(value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the first `dir/name` that is an executable file.
    ///
    /// Names containing a path separator are never looked up.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') {
            return None;
        }

        let found = self
            .directories()
            .into_iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate));

        match &found {
            Some(path) => log::debug!("resolved {} to {}", name, path.display()),
            None => log::debug!("{} not found in PATH", name),
        }
        found
    }

    /// Names of every executable reachable through PATH, deduplicated.
    pub fn executables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();

        for dir in self.directories() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if !names.contains(name) && is_executable(&entry.path()) {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        names
    }
}

/// A regular file (after following symlinks) with any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_executable;
    use std::fs;

    fn search_path(dirs: &[&Path]) -> Result<OsString, env::JoinPathsError> {
        env::join_paths(dirs)
    }

    #[test]
    fn test_first_match_wins() -> Result<(), Box<dyn std::error::Error>> {
        let a = tempfile::tempdir()?;
        let b = tempfile::tempdir()?;
        write_executable(a.path(), "tool", "exit 0")?;
        write_executable(b.path(), "tool", "exit 0")?;

        let resolver = PathResolver::new(search_path(&[a.path(), b.path()])?);
        assert_eq!(resolver.resolve("tool"), Some(a.path().join("tool")));

        let reversed = PathResolver::new(search_path(&[b.path(), a.path()])?);
        assert_eq!(reversed.resolve("tool"), Some(b.path().join("tool")));
        Ok(())
    }

    #[test]
    fn test_skips_non_executable() -> Result<(), Box<dyn std::error::Error>> {
        let a = tempfile::tempdir()?;
        let b = tempfile::tempdir()?;
        fs::write(a.path().join("tool"), "plain file")?;
        write_executable(b.path(), "tool", "exit 0")?;

        let resolver = PathResolver::new(search_path(&[a.path(), b.path()])?);
        assert_eq!(resolver.resolve("tool"), Some(b.path().join("tool")));
        Ok(())
    }

    #[test]
    fn test_skips_directories() -> Result<(), Box<dyn std::error::Error>> {
        let a = tempfile::tempdir()?;
        fs::create_dir(a.path().join("tool"))?;

        let resolver = PathResolver::new(search_path(&[a.path()])?);
        assert_eq!(resolver.resolve("tool"), None);
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let b = tempfile::tempdir()?;
        write_executable(b.path(), "tool", "exit 0")?;

        let missing = b.path().join("does-not-exist");
        let resolver = PathResolver::new(search_path(&[missing.as_path(), b.path()])?);
        assert_eq!(resolver.resolve("tool"), Some(b.path().join("tool")));
        Ok(())
    }

    #[test]
    fn test_empty_path_finds_nothing() {
        assert_eq!(PathResolver::new("").resolve("sh"), None);
        assert_eq!(PathResolver::default().resolve("sh"), None);
        assert!(PathResolver::new("").directories().is_empty());
    }

    #[test]
    fn test_names_with_separators_are_rejected() {
        let resolver = PathResolver::new("/bin:/usr/bin");
        assert_eq!(resolver.resolve("/bin/sh"), None);
        assert_eq!(resolver.resolve("./sh"), None);
        assert_eq!(resolver.resolve(""), None);
    }

    #[test]
    fn test_executables_are_deduplicated() -> Result<(), Box<dyn std::error::Error>> {
        let a = tempfile::tempdir()?;
        let b = tempfile::tempdir()?;
        write_executable(a.path(), "tool", "exit 0")?;
        write_executable(b.path(), "tool", "exit 0")?;
        write_executable(b.path(), "other", "exit 0")?;
        fs::write(b.path().join("readme"), "not executable")?;

        let resolver = PathResolver::new(search_path(&[a.path(), b.path()])?);
        let names: Vec<String> = resolver.executables().into_iter().collect();
        assert_eq!(names, vec!["other".to_string(), "tool".to_string()]);
        Ok(())
    }
}
