use std::io::Write;

use crate::core::commands::{Command, CommandError, CommandType, Outcome};
use crate::core::ShellState;
use crate::process::ProcessExecutor;

/// One input line split on whitespace. No quoting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let name = words.next()?;
        Some(Self {
            name,
            args: words.collect(),
        })
    }
}

/// Runs one input line at a time: builtins first, then PATH.
pub struct Dispatcher {
    state: ShellState,
    executor: ProcessExecutor,
}

impl Dispatcher {
    pub fn new(state: ShellState) -> Self {
        Self {
            state,
            executor: ProcessExecutor::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Records and executes `raw_line`. Blank input does nothing.
    ///
    /// Builtin output goes to `out`; external programs write straight to
    /// the inherited terminal.
    pub fn execute(&mut self, raw_line: &str, out: &mut dyn Write) -> Result<Outcome, CommandError> {
        let line = raw_line.trim();
        let Some(command) = ParsedCommand::parse(line) else {
            return Ok(Outcome::Continue);
        };
        self.state.history.record(line);

        match CommandType::from_name(&command.name) {
            Some(builtin) => {
                log::debug!("builtin {} {:?}", builtin.name(), command.args);
                builtin.execute(&command.args, &mut self.state, out)
            }
            None => self.run_external(&command),
        }
    }

    fn run_external(&self, command: &ParsedCommand) -> Result<Outcome, CommandError> {
        let path = self
            .state
            .resolver
            .resolve(&command.name)
            .ok_or_else(|| CommandError::NotFound(command.name.clone()))?;

        log::debug!("external {} {:?}", path.display(), command.args);
        self.executor.run(&path, &command.name, &command.args)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathResolver;
    use crate::process::ProcessError;
    use crate::test_utils::{output, test_state, write_executable, CwdGuard};
    use std::env;
    use std::path::Path;

    fn dispatcher(resolver: PathResolver) -> Dispatcher {
        Dispatcher::new(test_state(Path::new("/home/u"), Path::new("/tmp/unused"), resolver))
    }

    fn history_texts(dispatcher: &Dispatcher) -> Vec<String> {
        dispatcher
            .state()
            .history()
            .entries()
            .map(|e| e.text.to_string())
            .collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(ParsedCommand::parse("   "), None);
        assert_eq!(
            ParsedCommand::parse("  echo   a\tb  "),
            Some(ParsedCommand {
                name: "echo".to_string(),
                args: vec!["a".to_string(), "b".to_string()],
            })
        );
        let quoted = ParsedCommand::parse("echo 'a b'");
        assert_eq!(quoted.map(|c| c.args.len()), Some(2));
    }

    #[test]
    fn test_blank_line_is_ignored() -> Result<(), CommandError> {
        let mut dispatcher = dispatcher(PathResolver::new(""));
        let mut out = Vec::new();
        assert_eq!(dispatcher.execute("   \t ", &mut out)?, Outcome::Continue);
        assert!(out.is_empty());
        assert!(dispatcher.state().history().is_empty());
        Ok(())
    }

    #[test]
    fn test_lines_are_recorded_before_execution() -> Result<(), CommandError> {
        let mut dispatcher = dispatcher(PathResolver::new(""));
        let mut out = Vec::new();
        dispatcher.execute("  echo hi  ", &mut out)?;
        let _ = dispatcher.execute("missing-command", &mut out);
        dispatcher.execute("history", &mut out)?;

        assert_eq!(history_texts(&dispatcher), vec!["echo hi", "missing-command", "history"]);
        assert_eq!(output(out), "hi\n 1  echo hi\n 2  missing-command\n 3  history\n");
        Ok(())
    }

    #[test]
    fn test_builtin_shadows_path() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let marker = dir.path().join("ran");
        write_executable(dir.path(), "echo", &format!("touch {}", marker.display()))?;

        let mut dispatcher = dispatcher(PathResolver::new(dir.path()));
        let mut out = Vec::new();
        dispatcher.execute("echo a b c", &mut out)?;

        assert_eq!(output(out), "a b c\n");
        assert!(!marker.exists());
        Ok(())
    }

    #[test]
    fn test_command_not_found() {
        let mut dispatcher = dispatcher(PathResolver::new(""));
        let result = dispatcher.execute("foo", &mut Vec::new());
        match result {
            Err(e) => assert_eq!(e.to_string(), "foo: command not found"),
            Ok(_) => panic!("foo should not resolve"),
        }
    }

    #[test]
    fn test_external_command_runs_with_args() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let marker = dir.path().join("args");
        write_executable(
            dir.path(),
            "record-args",
            &format!("printf '%s|' \"$@\" > {}", marker.display()),
        )?;

        let mut dispatcher = dispatcher(PathResolver::new(dir.path()));
        let outcome = dispatcher.execute("record-args one two", &mut Vec::new())?;

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(std::fs::read_to_string(&marker)?, "one|two|");
        Ok(())
    }

    #[test]
    fn test_external_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        write_executable(dir.path(), "fails", "exit 4")?;

        let mut dispatcher = dispatcher(PathResolver::new(dir.path()));
        let result = dispatcher.execute("fails", &mut Vec::new());
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::Failed { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_exit_outcome() -> Result<(), CommandError> {
        let mut dispatcher = dispatcher(PathResolver::new(""));
        assert_eq!(dispatcher.execute("exit", &mut Vec::new())?, Outcome::Exit(0));
        assert_eq!(dispatcher.execute("exit 0", &mut Vec::new())?, Outcome::Exit(0));
        assert_eq!(dispatcher.execute("exit 1", &mut Vec::new())?, Outcome::Exit(1));
        assert_eq!(dispatcher.execute("exit foo", &mut Vec::new())?, Outcome::Exit(1));
        Ok(())
    }

    #[test]
    fn test_cd_then_pwd() -> Result<(), Box<dyn std::error::Error>> {
        let _guard = CwdGuard::acquire()?;
        let dir = tempfile::tempdir()?;
        let target = dir.path().canonicalize()?;

        let mut dispatcher = dispatcher(PathResolver::new(""));
        let mut out = Vec::new();
        dispatcher.execute(&format!("cd {}", target.display()), &mut out)?;
        dispatcher.execute("pwd", &mut out)?;

        assert_eq!(output(out), format!("{}\n", target.display()));
        assert_eq!(env::current_dir()?, target);
        Ok(())
    }
}
