use std::io::Write;

use super::{is_builtin, write_failed, Command, CommandError, Outcome};
use crate::core::ShellState;

/// `type name`: says whether `name` is a builtin or where PATH finds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCommand;

impl Command for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let name = args.first().ok_or(CommandError::MissingOperand("type"))?;

        if is_builtin(name) {
            writeln!(out, "{} is a shell builtin", state.palette.builtin(name))
                .map_err(write_failed("type"))?;
            return Ok(Outcome::Continue);
        }

        match state.resolver.resolve(name) {
            Some(path) => {
                writeln!(out, "{} is {}", name, path.display()).map_err(write_failed("type"))?;
                Ok(Outcome::Continue)
            }
            None => Err(CommandError::NotFound(name.clone())),
        }
    }
}
