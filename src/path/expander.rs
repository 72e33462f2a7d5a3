use std::path::PathBuf;

/// Tilde substitution for absolute-form `cd` targets.
///
/// Every `~` in the input is replaced with the home directory, wherever
/// it appears. No other normalisation is done.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: PathBuf,
}

impl PathExpander {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn expand(&self, path: &str) -> PathBuf {
        if path.contains('~') {
            PathBuf::from(path.replace('~', &self.home.to_string_lossy()))
        } else {
            PathBuf::from(path)
        }
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path.starts_with('~')
    }
}
