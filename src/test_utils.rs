//! Shared fixtures for unit tests.

use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::core::ShellState;
use crate::highlight::Palette;
use crate::path::PathResolver;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that change the process working directory and puts
/// the original directory back when dropped.
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub fn acquire() -> io::Result<Self> {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Self {
            original: env::current_dir()?,
            _lock: lock,
        })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// Writes a `#!/bin/sh` script and marks it executable.
pub fn write_executable(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

/// State with colour disabled, so output can be compared byte for byte.
pub fn test_state(home: &Path, history_file: &Path, resolver: PathResolver) -> ShellState {
    ShellState::new(home, history_file, resolver, Palette::plain())
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8_lossy(&buf).into_owned()
}
