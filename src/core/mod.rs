pub mod commands;
pub mod dispatcher;
pub mod env;
mod state;

pub use dispatcher::{Dispatcher, ParsedCommand};
pub use state::ShellState;
