// src/core/script.rs
//
// Runs a page script as an independent top-level program: its own process,
// its own entry-point semantics. The interpreter is picked by file extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ScriptError;

/// Set for every script so it can find the dashboard's files.
pub const ROOT_ENV: &str = "FRAUD_DASH_ROOT";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptRun {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Clone, Debug)]
pub struct ScriptRunner {
    cwd: PathBuf,
    /// extension (no dot, lowercase) → interpreter command line
    interpreters: BTreeMap<String, String>,
}

impl ScriptRunner {
    /// A relative `cwd` is anchored at the current directory now, so script
    /// paths and the child's working directory agree later.
    pub fn new(cwd: impl Into<PathBuf>, interpreters: BTreeMap<String, String>) -> Self {
        let cwd = anchored(cwd.into());
        let interpreters = interpreters
            .into_iter()
            .map(|(ext, cmd)| (ext.trim_start_matches('.').to_ascii_lowercase(), cmd))
            .collect();
        Self { cwd, interpreters }
    }

    pub fn cwd(&self) -> &Path { &self.cwd }

    pub fn interpreter_for(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        self.interpreters.get(&ext).map(String::as_str)
    }

    /// The program that will actually be started for `path`: the resolved
    /// interpreter, or the script itself when no interpreter is mapped.
    pub fn program_for(&self, path: &Path) -> Result<PathBuf, ScriptError> {
        let Some(line) = self.interpreter_for(path) else {
            return Ok(anchored(path.to_path_buf()));
        };
        let program = line.split_whitespace().next().unwrap_or_default();
        which::which(program)
            .map_err(|source| ScriptError::InterpreterNotFound { program: s!(program), source })
    }

    fn command_for(&self, path: &Path) -> Result<Command, ScriptError> {
        // Candidates are relative to the launching directory, not to `cwd`
        let script = anchored(path.to_path_buf());
        let mut cmd = Command::new(self.program_for(path)?);
        if let Some(line) = self.interpreter_for(path) {
            cmd.args(line.split_whitespace().skip(1)).arg(&script);
        }
        cmd.current_dir(&self.cwd)
            .env(ROOT_ENV, &self.cwd)
            .stdin(Stdio::null());
        Ok(cmd)
    }

    /// Run to completion on the calling thread.
    pub fn run(&self, path: &Path) -> Result<ScriptRun, ScriptError> {
        let mut cmd = self.command_for(path)?;
        logd!("Script: {:?}", cmd);

        let out = cmd.output().map_err(|source| ScriptError::Spawn {
            program: cmd.get_program().to_string_lossy().into_owned(),
            source,
        })?;

        let run = ScriptRun {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        };

        if !out.status.success() {
            return Err(ScriptError::Exit { status: out.status.to_string(), stderr: run.stderr });
        }
        Ok(run)
    }
}

fn anchored(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::path::absolute(&path).unwrap_or(path)
}
