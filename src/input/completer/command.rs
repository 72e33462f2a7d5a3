use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::core::commands::BUILTIN_NAMES;
use crate::path::PathResolver;

/// Completes the first word of a line against builtins and PATH.
#[derive(Clone, Debug)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(resolver: &PathResolver) -> Self {
        let mut commands = resolver.executables();
        commands.extend(BUILTIN_NAMES.iter().map(|name| name.to_string()));
        Self { commands }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
