use std::fmt;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShaderBuildError {
    #[error("shader compiler `{program}` is not available: {reason}")]
    CompilerUnavailable { program: String, reason: String },

    #[error("failed to compile {}: exit code {}", path.display(), ExitCode(*code))]
    CompileFailed { path: PathBuf, code: Option<i32> },

    #[error("failed to spawn `{program}` for {}: {source}", path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShaderBuildError>;

/// Formats an optional process exit code; `None` means the process was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub Option<i32>);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{}", code),
            None => f.write_str("signal"),
        }
    }
}
