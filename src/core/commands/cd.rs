use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::{Command, CommandError, Outcome};
use crate::core::ShellState;
use crate::path::PathExpander;

/// `cd [path]`.
///
/// Targets starting with `/` or `~` are used literally after every `~` is
/// replaced with the home directory; anything else is joined onto the
/// current directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdCommand;

impl CdCommand {
    fn destination(target: &str, state: &ShellState) -> Result<PathBuf, CommandError> {
        let expander = PathExpander::new(state.dirs.home());
        if target.starts_with('/') || expander.is_home_path(target) {
            return Ok(expander.expand(target));
        }
        let current = state
            .dirs
            .current_dir()
            .map_err(|e| CommandError::io("cd", e))?;
        Ok(current.join(target))
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let (target, destination) = match args {
            [] => {
                let home = state.dirs.home().to_path_buf();
                (home.to_string_lossy().into_owned(), home)
            }
            [target] => (target.clone(), Self::destination(target, state)?),
            _ => return Err(CommandError::invalid("cd", "too many arguments")),
        };

        state.dirs.change_dir(&destination).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => CommandError::io(format!("cd: {}", target), e),
            _ => CommandError::NoSuchDirectory {
                command: "cd",
                target,
            },
        })?;
        Ok(Outcome::Continue)
    }
}
