use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the invocation boundary. None of them abort the host.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("SpecRunner: Unable to run. It appears that no workspace is open.")]
    NoWorkspaceOpen,

    #[error("SpecRunner: Unable to run. It appears that no editor is open.")]
    NoActiveTarget,

    #[error("SpecRunner: Unable to debug. Unknown configured debugger option: {0}")]
    UnknownDebuggerProtocol(String),

    #[error("SpecRunner: Unable to run all specs. No spec directory found at {}.", .0.display())]
    MissingSpecDirectory(PathBuf),

    #[error("SpecRunner: Invalid configuration: {0}")]
    Config(String),

    #[error("SpecRunner: Unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RunError>;
