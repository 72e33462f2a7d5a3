use std::io::Write;

mod builtin;
mod cd;
mod history;
mod ls;
mod type_cmd;

pub use builtin::{ClearCommand, EchoCommand, ExitCommand, PwdCommand};
pub use cd::CdCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;
pub use type_cmd::TypeCommand;

use crate::core::ShellState;
use crate::input::HistoryError;
use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    #[error("{command}: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
    #[error("{command}: {target}: No such file or directory")]
    NoSuchDirectory {
        command: &'static str,
        target: String,
    },
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("history: {0}")]
    History(#[from] HistoryError),
}

impl CommandError {
    pub(crate) fn invalid(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::InvalidArgument {
            command,
            message: message.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Io {
            context: context.into(),
            source,
        }
    }
}

/// What the interactive loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError>;
}

/// The fixed builtin table. Builtins always shadow PATH executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Exit(ExitCommand),
    Echo(EchoCommand),
    Type(TypeCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    History(HistoryCommand),
    Clear(ClearCommand),
}

pub const BUILTIN_NAMES: [&str; 8] = ["exit", "echo", "type", "pwd", "cd", "ls", "history", "clear"];

impl CommandType {
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "exit" => CommandType::Exit(ExitCommand),
            "echo" => CommandType::Echo(EchoCommand),
            "type" => CommandType::Type(TypeCommand),
            "pwd" => CommandType::Pwd(PwdCommand),
            "cd" => CommandType::Cd(CdCommand),
            "ls" => CommandType::Ls(LsCommand),
            "history" => CommandType::History(HistoryCommand),
            "clear" => CommandType::Clear(ClearCommand),
            _ => return None,
        };
        Some(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Exit(_) => "exit",
            CommandType::Echo(_) => "echo",
            CommandType::Type(_) => "type",
            CommandType::Pwd(_) => "pwd",
            CommandType::Cd(_) => "cd",
            CommandType::Ls(_) => "ls",
            CommandType::History(_) => "history",
            CommandType::Clear(_) => "clear",
        }
    }
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Echo(cmd) => cmd.execute(args, state, out),
            CommandType::Type(cmd) => cmd.execute(args, state, out),
            CommandType::Pwd(cmd) => cmd.execute(args, state, out),
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Ls(cmd) => cmd.execute(args, state, out),
            CommandType::History(cmd) => cmd.execute(args, state, out),
            CommandType::Clear(cmd) => cmd.execute(args, state, out),
        }
    }
}

pub fn is_builtin(name: &str) -> bool {
    CommandType::from_name(name).is_some()
}

/// Maps a failed write to the terminal onto a command error.
pub(crate) fn write_failed(command: &'static str) -> impl FnOnce(std::io::Error) -> CommandError {
    move |source| CommandError::io(command, source)
}
