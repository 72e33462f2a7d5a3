use std::io::Write;
use std::path::Path;

use super::{write_failed, Command, CommandError, Outcome};
use crate::core::ShellState;
use crate::input::{HistoryEntry, SaveMode};

/// `history [N | -r [file] | -a [file] | -w [file]]`.
///
/// Without a file operand the flags use the configured history file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCommand;

impl HistoryCommand {
    fn show<'a, I>(&self, entries: I, state: &ShellState, out: &mut dyn Write) -> Result<(), CommandError>
    where
        I: Iterator<Item = HistoryEntry<'a>>,
    {
        for entry in entries {
            writeln!(out, " {}  {}", state.palette.index(entry.index), entry.text)
                .map_err(write_failed("history"))?;
        }
        Ok(())
    }

    fn read(&self, path: &Path, state: &mut ShellState) -> Result<(), CommandError> {
        state.history.load(path)?;
        Ok(())
    }

    fn write(&self, path: &Path, mode: SaveMode, state: &ShellState) -> Result<(), CommandError> {
        state.history.save(path, mode)?;
        Ok(())
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let default_file = state.history_file.clone();

        match args {
            [] => self.show(state.history.entries(), state, out)?,
            [flag, path] if flag == "-r" => self.read(Path::new(path), state)?,
            [flag, path] if flag == "-a" => self.write(Path::new(path), SaveMode::Append, state)?,
            [flag, path] if flag == "-w" => self.write(Path::new(path), SaveMode::Truncate, state)?,
            [flag] if flag == "-r" => self.read(&default_file, state)?,
            [flag] if flag == "-a" => self.write(&default_file, SaveMode::Append, state)?,
            [flag] if flag == "-w" => self.write(&default_file, SaveMode::Truncate, state)?,
            [count] => {
                let count: usize = count
                    .trim()
                    .parse()
                    .map_err(|_| CommandError::invalid("history", "argument should be a number"))?;
                self.show(state.history.recent(count), state, out)?;
            }
            _ => return Err(CommandError::invalid("history", "too many arguments")),
        }
        Ok(Outcome::Continue)
    }
}
