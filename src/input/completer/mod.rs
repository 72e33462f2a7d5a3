mod command;
mod path;
mod shell;

pub use shell::{ShellHelper, PROMPT_SUFFIX};
