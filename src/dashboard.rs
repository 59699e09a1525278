// src/dashboard.rs
//
// Startup wiring shared by the GUI and CLI:
// config → asset sync → registry → probe → router.

use crate::config::DashConfig;
use crate::core::{Frame, ModuleRegistry, Resolver, ScriptRunner};
use crate::pages;
use crate::router::Router;

pub struct Dashboard {
    pub config: DashConfig,
    pub router: Router,
    /// Startup warnings (sync, config) shown in the sidebar.
    pub notices: Frame,
}

impl Dashboard {
    /// Built-in pages only. Hosts that link page modules in use `with_registry`.
    pub fn start(config: DashConfig, notices: Frame) -> Self {
        let mut registry = ModuleRegistry::new();
        pages::register_builtins(&mut registry);
        Self::with_registry(config, registry, notices)
    }

    pub fn with_registry(config: DashConfig, registry: ModuleRegistry, mut notices: Frame) -> Self {
        crate::sync::run_all(&config, &mut notices);

        let scripts = ScriptRunner::new(config.root.clone(), config.interpreters());
        let resolver = Resolver::new(registry, scripts);
        let router = Router::probed(config.catalog(), resolver);

        logf!(
            "Init: root={}, pages available={}/{}",
            config.root.display(),
            router.availability().available_count(),
            router.catalog().len()
        );

        Self { config, router, notices }
    }
}
