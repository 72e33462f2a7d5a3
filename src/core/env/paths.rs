use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Working-directory view of the shell.
///
/// The current directory itself lives in the OS and is queried on demand;
/// only the home directory is held here.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    home: PathBuf,
}

impl DirectoryContext {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// `HOME`, then the platform's notion of home, then `/`.
    pub fn from_env() -> Self {
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));
        Self::new(home)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    pub fn change_dir(&self, target: &Path) -> io::Result<()> {
        env::set_current_dir(target)?;
        log::debug!("working directory is now {}", target.display());
        Ok(())
    }

    /// Current directory as shown in the prompt.
    pub fn display_path(&self) -> String {
        match self.current_dir() {
            Ok(current) => abbreviate_home(&current.to_string_lossy(), &self.home.to_string_lossy()),
            Err(e) => {
                log::warn!("cannot determine working directory: {}", e);
                "?".to_string()
            }
        }
    }
}

/// Replaces a literal `home` prefix of `current` with `~`.
///
/// This is a plain string prefix test, not a path-component one.
pub fn abbreviate_home(current: &str, home: &str) -> String {
    if home.is_empty() {
        return current.to_string();
    }
    match current.strip_prefix(home) {
        Some(rest) => format!("~{}", rest),
        None => current.to_string(),
    }
}
