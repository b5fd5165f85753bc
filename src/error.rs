use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that end a growl run
#[derive(Debug, Error)]
pub enum GrowlError {
    /// No growl.yaml in the workspace
    #[error("{} not found. Generate one with growl init", .0.display())]
    ConfigNotFound(PathBuf),

    /// growl.yaml exists but could not be parsed
    #[error("failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `init` refused to overwrite an existing file
    #[error("{} already exists", .0.display())]
    ConfigExists(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested command has no definition
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// A command line still contains `%N` placeholders after substitution
    #[error("missing argument(s): {}", .0.join(", "))]
    MissingArguments(Vec<String>),

    /// The configured shell string has no program in it
    #[error("shell is empty")]
    EmptyShell,

    /// The subprocess could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran and exited unsuccessfully
    #[error("`{line}` failed: {status}")]
    CommandFailed { line: String, status: ExitStatus },

    /// `go build` exited unsuccessfully
    #[error("build failed: {0}")]
    BuildFailed(ExitStatus),
}

impl GrowlError {
    /// Exit code to hand back to the caller's shell
    pub fn exit_code(&self) -> i32 {
        match self {
            GrowlError::CommandFailed { status, .. } | GrowlError::BuildFailed(status) => {
                status.code().filter(|code| *code != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowlError>;
