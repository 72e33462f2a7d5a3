use std::io::{self, Write};
use std::path::Path;

use crate::core::commands::Outcome;
use crate::core::Dispatcher;
use crate::input::History;

pub(crate) trait LineHandler {
    /// Executes one line, returning an exit code when the shell should stop.
    fn handle_line(&mut self, line: &str) -> Option<i32>;
}

impl LineHandler for super::Shell {
    fn handle_line(&mut self, line: &str) -> Option<i32> {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            if let Err(e) = self.editor.add_history_entry(trimmed) {
                log::warn!("Couldn't add to editor history: {}", e);
            }
        }

        run_line(
            &mut self.dispatcher,
            &self.config.history_file,
            line,
            &mut io::stdout(),
            &mut io::stderr(),
        )
    }
}

/// Appends a non-blank line to the history file, then dispatches it.
///
/// Command errors are written to `err` and never stop the loop.
pub(crate) fn run_line(
    dispatcher: &mut Dispatcher,
    history_file: &Path,
    line: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Option<i32> {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        if let Err(e) = History::persist_line(history_file, trimmed) {
            log::warn!("Couldn't append to history file: {}", e);
        }
    }

    match dispatcher.execute(line, out) {
        Ok(Outcome::Continue) => None,
        Ok(Outcome::Exit(code)) => Some(code),
        Err(e) => {
            let palette = dispatcher.state().palette();
            if let Err(write_err) = writeln!(err, "{}", palette.error(&e.to_string())) {
                log::warn!("Couldn't report error: {}", write_err);
            }
            None
        }
    }
}
