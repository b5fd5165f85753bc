//! growl runs named shell commands from a `growl.yaml` file and wraps
//! `go build` for cross compilation.

pub mod cli;
pub mod config;
pub mod cross;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod process;
pub mod shell;
pub mod template;
pub mod workspace;

pub use error::{GrowlError, Result};
