// src/pages/mod.rs
//
// First-party pages and the catalog of optional analytic pages.
// The analytic pages themselves live outside this crate; only their
// candidate locations are known here.

pub mod about;
pub mod catalog;
pub mod welcome;

use crate::core::ModuleRegistry;

pub use catalog::default_catalog;

/// Register the built-in Home/About modules.
pub fn register_builtins(registry: &mut ModuleRegistry) {
    registry.register_module(welcome::module());
    registry.register_module(about::module());
}
