// src/core/probe.rs
//
// Presence probes used to hide dead menu entries.
// Existence checks only: registry lookup or file-exists. No loader runs,
// no script spawns, so probing every page at startup is side-effect free.

use std::collections::BTreeMap;

use super::{
    page_spec::{PageKind, PageSpec},
    registry::ModuleRegistry,
    resolver::Attempt,
};

/// First candidate of `spec` that exists, modules before files.
pub fn find_candidate(spec: &PageSpec, registry: &ModuleRegistry) -> Option<Attempt> {
    if let Some(id) = spec.modules.iter().find(|id| registry.contains(id)) {
        return Some(Attempt::Module(id.clone()));
    }
    spec.files.iter().find(|p| p.exists()).map(|p| Attempt::File(p.clone()))
}

/// Which optional pages can be resolved. Computed once per process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Availability {
    pages: BTreeMap<PageKind, bool>,
}

impl Availability {
    pub fn probe(catalog: &[PageSpec], registry: &ModuleRegistry) -> Self {
        let pages = catalog
            .iter()
            .map(|spec| {
                let found = find_candidate(spec, registry);
                match &found {
                    Some(hit) => logf!("Probe: {:?} available via {}", spec.kind, hit),
                    None      => logd!("Probe: {:?} unavailable", spec.kind),
                }
                (spec.kind, found.is_some())
            })
            .collect();
        Self { pages }
    }

    pub fn from_flags<I>(flags: I) -> Self
    where I: IntoIterator<Item = (PageKind, bool)> {
        Self { pages: flags.into_iter().collect() }
    }

    /// Unknown pages count as unavailable.
    pub fn is_available(&self, kind: PageKind) -> bool {
        self.pages.get(&kind).copied().unwrap_or(false)
    }

    pub fn available_count(&self) -> usize {
        self.pages.values().filter(|v| **v).count()
    }
}
