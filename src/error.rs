/// Failures that end the interactive session.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ctrl-C handler error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}
