use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::env::DirectoryContext;
use crate::flags::Flags;

pub const HISTORY_FILE_VAR: &str = "HISTFILE";
pub const DEFAULT_HISTORY_FILE: &str = "/tmp/shell_history";

/// Startup settings, resolved once from flags and the environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub home: PathBuf,
    pub history_file: PathBuf,
    pub load_history: bool,
    pub quiet: bool,
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            home: DirectoryContext::from_env().home().to_path_buf(),
            history_file: resolve_history_file(
                flags.history_file.clone(),
                env::var_os(HISTORY_FILE_VAR),
            ),
            load_history: !flags.no_history_load,
            quiet: flags.quiet,
        }
    }
}

/// Flag, then `HISTFILE`, then the fixed default.
pub fn resolve_history_file(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
}
