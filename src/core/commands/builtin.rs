use std::io::Write;

use super::{write_failed, Command, CommandError, Outcome};
use crate::core::ShellState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    /// `exit` and `exit 0` succeed; any other trailing argument means 1.
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let code = match args.last() {
            None => 0,
            Some(last) if last.trim() == "0" => 0,
            Some(_) => 1,
        };
        Ok(Outcome::Exit(code))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingOperand("echo"));
        }
        writeln!(out, "{}", args.join(" ")).map_err(write_failed("echo"))?;
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let current = state
            .dirs
            .current_dir()
            .map_err(|e| CommandError::io("pwd", e))?;
        writeln!(out, "{}", current.display()).map_err(write_failed("pwd"))?;
        Ok(Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J\x1b[3J";

impl Command for ClearCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        out.write_all(CLEAR_SCREEN.as_bytes())
            .and_then(|_| out.flush())
            .map_err(write_failed("clear"))?;
        Ok(Outcome::Continue)
    }
}
