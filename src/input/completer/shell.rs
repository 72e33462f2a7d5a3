use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::Palette;
use crate::path::PathResolver;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub const PROMPT_SUFFIX: &str = " $ ";

/// Line-editor hooks: tab completion and a coloured prompt.
#[derive(Clone)]
pub struct ShellHelper {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    palette: Palette,
}

impl ShellHelper {
    pub fn new(resolver: &PathResolver, palette: Palette) -> Self {
        ShellHelper {
            command_completer: CommandCompleter::new(resolver),
            path_completer: PathCompleter::new(),
            palette,
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before_cursor = &line[..pos];
        let start = before_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = &before_cursor[start..];

        if before_cursor[..start].trim().is_empty() {
            (start, self.command_completer.complete_command(word))
        } else {
            (start, self.path_completer.complete_path(word))
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        match prompt.strip_suffix(PROMPT_SUFFIX) {
            Some(path) if self.palette.is_enabled() => {
                Cow::Owned(format!("{}{}", self.palette.prompt_path(path), PROMPT_SUFFIX))
            }
            _ => Cow::Borrowed(prompt),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}
