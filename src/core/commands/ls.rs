use std::fs;
use std::io::Write;

use super::{write_failed, Command, CommandError, Outcome};
use crate::core::ShellState;

/// Names of the entries directly in the working directory, in the order
/// the directory read returns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let current = state
            .dirs
            .current_dir()
            .map_err(|e| CommandError::io("ls", e))?;
        let entries = fs::read_dir(&current)
            .map_err(|e| CommandError::io(format!("ls: {}", current.display()), e))?;

        for entry in entries {
            let entry = entry.map_err(|e| CommandError::io("ls", e))?;
            let name = entry.file_name();
            writeln!(out, "{}", state.palette.entry(&name.to_string_lossy()))
                .map_err(write_failed("ls"))?;
        }
        Ok(Outcome::Continue)
    }
}
