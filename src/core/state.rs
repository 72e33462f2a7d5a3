use std::path::PathBuf;

use crate::config::ShellConfig;
use crate::core::env::DirectoryContext;
use crate::highlight::Palette;
use crate::input::History;
use crate::path::PathResolver;

/// Everything a builtin may read or change.
///
/// Created once at startup and owned by the dispatcher.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub(crate) dirs: DirectoryContext,
    pub(crate) history: History,
    pub(crate) history_file: PathBuf,
    pub(crate) resolver: PathResolver,
    pub(crate) palette: Palette,
}

impl ShellState {
    pub fn new(
        home: impl Into<PathBuf>,
        history_file: impl Into<PathBuf>,
        resolver: PathResolver,
        palette: Palette,
    ) -> Self {
        Self {
            dirs: DirectoryContext::new(home),
            history: History::new(),
            history_file: history_file.into(),
            resolver,
            palette,
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(
            &config.home,
            &config.history_file,
            PathResolver::from_env(),
            Palette::detect(),
        )
    }

    pub fn dirs(&self) -> &DirectoryContext {
        &self.dirs
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}
