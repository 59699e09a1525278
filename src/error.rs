// src/error.rs
//
// Error types for the resolution core and its ambient layers.
// None of these are fatal to the dashboard: callers turn them into notices.

use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a registered page module could not be produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing is registered under this id (an optional page that isn't installed).
    #[error("module `{0}` is not installed")]
    Missing(String),

    /// The module exists but its loader failed.
    #[error("{0}")]
    Failed(BoxError),
}

/// Running a page script as a standalone program.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("interpreter `{program}` not found on PATH")]
    InterpreterNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("could not start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exited with {status}{}", fmt_stderr(.stderr))]
    Exit { status: String, stderr: String },
}

fn fmt_stderr(stderr: &str) -> String {
    let tail = stderr.trim();
    if tail.is_empty() { s!() } else { format!(": {tail}") }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unknown page `{0}` in [pages] (expected one of: {1})")]
    UnknownPage(String, String),

    #[error("menu label `{0}` is used more than once")]
    DuplicateLabel(String),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("source `{0}` does not exist")]
    MissingSource(PathBuf),

    #[error("copy `{from}` → `{to}` failed")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `err: cause: cause` on one line, for notices.
pub fn report(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(cause) = cur {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        cur = cause.source();
    }
    out
}
