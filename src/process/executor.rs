use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Runs external programs in the foreground, sharing the shell's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `path` with `args` and blocks until it terminates.
    ///
    /// `name` becomes `argv[0]`, so the child sees the command as typed
    /// rather than the resolved location.
    pub fn run(&self, path: &Path, name: &str, args: &[String]) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(path);
        command
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            program: name.to_string(),
            source,
        })?;
        log::debug!("spawned {} (pid {})", path.display(), child.id());

        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: name.to_string(),
            source,
        })?;
        log::debug!("{} exited with {}", name, status);

        if status.success() {
            Ok(status)
        } else {
            Err(ProcessError::Failed {
                program: name.to_string(),
                status,
            })
        }
    }
}
