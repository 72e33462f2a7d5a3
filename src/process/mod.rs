use std::process::ExitStatus;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("{program}: failed to start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program}: failed while waiting: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program}: {status}")]
    Failed { program: String, status: ExitStatus },
}
