mod completer;
pub mod history;

pub use completer::{ShellHelper, PROMPT_SUFFIX};
pub use history::{History, HistoryEntry, HistoryError, SaveMode};
