// src/core/mod.rs

pub mod output;
pub mod page_spec;
pub mod probe;
pub mod registry;
pub mod resolver;
pub mod script;

pub use output::{Block, Frame, Level};
pub use page_spec::{PageKind, PageSpec};
pub use probe::Availability;
pub use registry::{Module, ModuleRegistry};
pub use resolver::{Attempt, Outcome, Resolver};
pub use script::ScriptRunner;
