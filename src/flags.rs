use std::path::PathBuf;

use argh::FromArgs;

#[derive(FromArgs, Debug, Clone, Default)]
/// A small interactive command shell.
pub struct Flags {
    /// print version information and exit
    #[argh(switch, short = 'v')]
    pub version: bool,

    /// log at debug level (overrides RUST_LOG)
    #[argh(switch, short = 'd')]
    pub debug: bool,

    /// suppress startup warnings
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// history file to pre-load and append entered lines to
    #[argh(option)]
    pub history_file: Option<PathBuf>,

    /// start with an empty history instead of loading the history file
    #[argh(switch)]
    pub no_history_load: bool,
}
