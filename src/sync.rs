// src/sync.rs
//
// One-time asset sync before the menu is built (models, notebooks, ...).
// Best effort: a failed task becomes a warning, startup carries on.

use std::fs;
use std::path::Path;

use crate::config::{DashConfig, SyncTask};
use crate::core::Frame;
use crate::error::{report, SyncError};

/// Copy a single file, or a directory tree, into `to`. Returns files copied.
pub fn copy_into(from: &Path, to: &Path) -> Result<usize, SyncError> {
    if !from.exists() {
        return Err(SyncError::MissingSource(from.to_path_buf()));
    }
    let io_err = |source| SyncError::Copy { from: from.to_path_buf(), to: to.to_path_buf(), source };

    if from.is_file() {
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        fs::copy(from, to).map_err(io_err)?;
        return Ok(1);
    }

    fs::create_dir_all(to).map_err(io_err)?;
    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let Some(name) = path.file_name() else { continue };
        copied += copy_into(&path, &to.join(name))?;
    }
    Ok(copied)
}

pub fn run_task(cfg: &DashConfig, task: &SyncTask) -> Result<usize, SyncError> {
    copy_into(&cfg.rooted(&task.from), &cfg.rooted(&task.to))
}

/// Run every `[[sync]]` task. Failures are written to `notices` as warnings.
pub fn run_all(cfg: &DashConfig, notices: &mut Frame) {
    for task in &cfg.sync {
        match run_task(cfg, task) {
            Ok(n) => logf!("Sync: {} copied {} file(s)", task.name, n),
            Err(e) => {
                let msg = report(&e);
                logw!("Sync: {} skipped: {}", task.name, msg);
                notices.warning(format!("{} sync skipped: {}", task.name, msg));
            }
        }
    }
}
