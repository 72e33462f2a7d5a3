use std::io::{self, Write};

use rustyline::{error::ReadlineError, history::FileHistory, Editor};

mod executor;

use crate::{
    config::ShellConfig,
    core::{Dispatcher, ShellState},
    error::ShellError,
    input::{ShellHelper, PROMPT_SUFFIX},
};

use executor::LineHandler;

/// The interactive read-execute loop.
pub struct Shell {
    pub(crate) editor: Editor<ShellHelper, FileHistory>,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let mut state = ShellState::from_config(&config);
        if config.load_history {
            Self::preload_history(&mut state, &config);
        }

        let helper = ShellHelper::new(state.resolver(), state.palette());
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(helper));
        for entry in state.history().entries() {
            editor.add_history_entry(entry.text)?;
        }

        // A foreground child gets SIGINT from the terminal; the shell survives it.
        ctrlc::set_handler(|| log::debug!("interrupt received"))?;

        Ok(Shell {
            editor,
            dispatcher: Dispatcher::new(state),
            config,
        })
    }

    fn preload_history(state: &mut ShellState, config: &ShellConfig) {
        if !config.history_file.exists() {
            log::debug!("no history file at {}", config.history_file.display());
            return;
        }
        if let Err(e) = state.history_mut().load(&config.history_file) {
            if !config.quiet {
                eprintln!("Warning: Couldn't load history: {}", e);
            }
        }
    }

    fn prompt(&self) -> String {
        format!("{}{}", self.dispatcher.state().dirs().display_path(), PROMPT_SUFFIX)
    }

    /// Runs until `exit` or end of input, returning the process exit code.
    ///
    /// Any line-source failure other than an interrupt ends the session.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = self.prompt();
            match ReadOutcome::from(self.editor.readline(&prompt)) {
                ReadOutcome::Line(line) => {
                    if let Some(code) = self.handle_line(&line) {
                        return Ok(code);
                    }
                }
                ReadOutcome::Retry => continue,
                ReadOutcome::End => {
                    log::debug!("end of input");
                    return Ok(0);
                }
                ReadOutcome::Failed(e) => {
                    let palette = self.dispatcher.state().palette();
                    eprintln!("{}", palette.error(&format!("Error: {}", e)));
                    return Err(e.into());
                }
            }
            io::stdout().flush()?;
        }
    }
}

/// What the loop does with one result from the line editor.
#[derive(Debug)]
enum ReadOutcome {
    Line(String),
    Retry,
    End,
    Failed(ReadlineError),
}

impl From<Result<String, ReadlineError>> for ReadOutcome {
    fn from(result: Result<String, ReadlineError>) -> Self {
        match result {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Retry,
            Err(ReadlineError::Eof) => ReadOutcome::End,
            Err(e) => ReadOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_retries_and_eof_ends() {
        assert!(matches!(
            ReadOutcome::from(Err(ReadlineError::Interrupted)),
            ReadOutcome::Retry
        ));
        assert!(matches!(ReadOutcome::from(Err(ReadlineError::Eof)), ReadOutcome::End));
        assert!(matches!(
            ReadOutcome::from(Ok("ls".to_string())),
            ReadOutcome::Line(ref line) if line == "ls"
        ));
    }

    #[test]
    fn test_io_failure_stops_the_loop() {
        let err = io::Error::new(io::ErrorKind::Other, "terminal revoked");
        assert!(matches!(
            ReadOutcome::from(Err(ReadlineError::Io(err))),
            ReadOutcome::Failed(ReadlineError::Io(_))
        ));
    }
}
