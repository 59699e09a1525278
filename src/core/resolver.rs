// src/core/resolver.rs
//
// Best-effort page resolution:
//   1) registry modules, each scanned for the first matching entry name
//   2) the first script file that exists, run as its own program
//   3) an inline "not found" listing everything tried
// Every failure ends up as a notice in the frame; nothing here panics the host.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{report, LoadError};
use super::{
    output::Frame,
    page_spec::PageSpec,
    registry::ModuleRegistry,
    script::ScriptRunner,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    Module(String),
    File(PathBuf),
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempt::Module(id) => write!(f, "module `{id}`"),
            Attempt::File(p)    => write!(f, "script `{}`", p.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A module entry point ran.
    Invoked { module: String, function: String },
    /// A script ran to completion.
    Executed { path: PathBuf },
    /// The first existing script failed. Later candidates were not tried.
    Failed { path: PathBuf, reason: String },
    NotFound { attempted: Vec<Attempt> },
}

pub struct Resolver {
    registry: ModuleRegistry,
    scripts: ScriptRunner,
}

impl Resolver {
    pub fn new(registry: ModuleRegistry, scripts: ScriptRunner) -> Self {
        Self { registry, scripts }
    }

    pub fn registry(&self) -> &ModuleRegistry { &self.registry }
    pub fn scripts(&self) -> &ScriptRunner { &self.scripts }

    pub fn resolve(&self, spec: &PageSpec, frame: &mut Frame) -> Outcome {
        let mut attempted = Vec::with_capacity(spec.modules.len() + spec.files.len());

        for id in &spec.modules {
            attempted.push(Attempt::Module(id.clone()));
            if let Some(function) = self.try_module(id, &spec.functions, frame) {
                logf!("Resolve: {} → {}::{}", spec.label, id, function);
                return Outcome::Invoked { module: id.clone(), function };
            }
        }

        for path in &spec.files {
            attempted.push(Attempt::File(path.clone()));
            if !path.exists() { continue; }

            return match self.scripts.run(path) {
                Ok(run) => {
                    logf!("Resolve: {} → script {}", spec.label, path.display());
                    if !run.stdout.trim().is_empty() {
                        frame.output(run.stdout.trim_end());
                    }
                    Outcome::Executed { path: path.clone() }
                }
                Err(e) => {
                    let reason = report(&e);
                    loge!("Resolve: {} failed: {}", path.display(), reason);
                    frame.error(format!("Failed to execute {}: {}", file_name(path), reason));
                    Outcome::Failed { path: path.clone(), reason }
                }
            };
        }

        logw!("Resolve: nothing runnable for {} ({} candidates)", spec.label, attempted.len());
        frame.error(not_found_message(&spec.label, &attempted));
        Outcome::NotFound { attempted }
    }

    /// Load `id` and call its first entry in `functions` order.
    /// Returns the name that ran; any miss or failure returns None.
    fn try_module(&self, id: &str, functions: &[String], frame: &mut Frame) -> Option<String> {
        let module = match self.registry.load(id) {
            Ok(m) => m,
            Err(LoadError::Missing(_)) => {
                logf!("Resolve: {id} not installed, skipping");
                return None;
            }
            Err(e) => {
                logw!("Resolve: import {id} failed: {}", report(&e));
                frame.warning(format!("Issue importing `{id}`: {}", report(&e)));
                return None;
            }
        };

        let Some((name, entry)) = functions
            .iter()
            .find_map(|name| module.entry(name).map(|e| (name, e)))
        else {
            logd!("Resolve: {id} has no entry among {:?}", functions);
            return None;
        };

        match entry(frame) {
            Ok(()) => Some(name.clone()),
            Err(e) => {
                logw!("Resolve: {id}::{name} failed: {}", report(e.as_ref()));
                frame.warning(format!("Issue importing `{id}`: {}", report(e.as_ref())));
                None
            }
        }
    }

    /// Call `module::function` if it resolves, otherwise render `fallback`.
    /// Used for the always-present pages (Home/About).
    pub fn render_or<F>(&self, module: &str, function: &str, frame: &mut Frame, fallback: F)
    where F: FnOnce(&mut Frame) {
        let entry = match self.registry.load(module) {
            Ok(m) => m.entry(function).cloned(),
            Err(LoadError::Missing(_)) => None,
            Err(e) => {
                frame.warning(format!("Issue importing {module}.{function}: {}", report(&e)));
                None
            }
        };

        let Some(entry) = entry else { return fallback(frame) };

        if let Err(e) = entry(frame) {
            loge!("Page: {module}.{function} failed: {}", report(e.as_ref()));
            frame.warning(format!("Issue running {module}.{function}: {}", report(e.as_ref())));
            fallback(frame);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn not_found_message(label: &str, attempted: &[Attempt]) -> String {
    let mut msg = format!("Could not find a runnable target for {label}.\n\nExpected one of these:");
    for a in attempted {
        msg.push_str("\n• ");
        msg.push_str(&a.to_string());
    }
    msg
}
