// src/core/registry.rs
//
// Explicit stand-in for "import a module and look up a function by name".
// A module id maps to a loader; loading yields a Module whose exports are
// (name, entry) pairs. Looking an id up never runs its loader.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, LoadError};
use super::output::Frame;

pub type PageResult = Result<(), BoxError>;

/// A zero-argument page entry point. It draws into the frame it is given.
pub type Entry = Arc<dyn Fn(&mut Frame) -> PageResult + Send + Sync>;

type Loader = Box<dyn Fn() -> Result<Module, BoxError> + Send + Sync>;

#[derive(Clone)]
pub struct Module {
    id: String,
    exports: Vec<(String, Entry)>,
}

impl Module {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), exports: Vec::new() }
    }

    pub fn export<F>(mut self, name: impl Into<String>, f: F) -> Self
    where F: Fn(&mut Frame) -> PageResult + Send + Sync + 'static {
        self.exports.push((name.into(), Arc::new(f)));
        self
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.exports.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(|(n, _)| n.as_str())
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("id", &self.id)
            .field("exports", &self.export_names().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Default)]
pub struct ModuleRegistry {
    loaders: HashMap<String, Loader>,
}

impl ModuleRegistry {
    pub fn new() -> Self { Self::default() }

    /// Register a lazily-built module. The loader runs on every `load`.
    pub fn register<F>(&mut self, id: impl Into<String>, loader: F)
    where F: Fn() -> Result<Module, BoxError> + Send + Sync + 'static {
        let id = id.into();
        logd!("Registry: registered {id}");
        self.loaders.insert(id, Box::new(loader));
    }

    /// Register an already-built module under its own id.
    pub fn register_module(&mut self, module: Module) {
        let id = s!(module.id());
        self.register(id, move || Ok(module.clone()));
    }

    /// Existence check only. Never runs page code.
    pub fn contains(&self, id: &str) -> bool {
        self.loaders.contains_key(id)
    }

    pub fn load(&self, id: &str) -> Result<Module, LoadError> {
        let loader = self.loaders.get(id).ok_or_else(|| LoadError::Missing(s!(id)))?;
        loader().map_err(LoadError::Failed)
    }

    pub fn len(&self) -> usize { self.loaders.len() }
    pub fn is_empty(&self) -> bool { self.loaders.is_empty() }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.loaders.keys().collect();
        ids.sort();
        f.debug_struct("ModuleRegistry").field("modules", &ids).finish()
    }
}
