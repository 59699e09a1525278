// src/router.rs
//
// Menu assembly and dispatch. Availability is computed once (see core::probe)
// and handed in; the router never re-probes.

use crate::config::consts::*;
use crate::core::{Availability, Frame, Outcome, PageKind, PageSpec, Resolver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Home,
    Page(PageKind),
    About,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: String,
    pub target: Target,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Home,
    About,
    Page(Outcome),
    /// Label not in the menu (stale selection, hidden page).
    Unavailable,
}

pub struct Router {
    catalog: Vec<PageSpec>,
    availability: Availability,
    resolver: Resolver,
}

impl Router {
    pub fn new(catalog: Vec<PageSpec>, availability: Availability, resolver: Resolver) -> Self {
        Self { catalog, availability, resolver }
    }

    /// Probe the catalog against the resolver's registry, then build.
    pub fn probed(catalog: Vec<PageSpec>, resolver: Resolver) -> Self {
        let availability = Availability::probe(&catalog, resolver.registry());
        Self::new(catalog, availability, resolver)
    }

    pub fn catalog(&self) -> &[PageSpec] { &self.catalog }
    pub fn availability(&self) -> &Availability { &self.availability }
    pub fn resolver(&self) -> &Resolver { &self.resolver }

    /// Home, available pages in catalog order, About.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let mut out = vec![MenuEntry { label: s!(HOME_LABEL), icon: s!(HOME_ICON), target: Target::Home }];

        out.extend(
            self.catalog
                .iter()
                .filter(|spec| self.availability.is_available(spec.kind))
                .map(|spec| MenuEntry {
                    label: spec.label.clone(),
                    icon: spec.icon.clone(),
                    target: Target::Page(spec.kind),
                }),
        );

        out.push(MenuEntry { label: s!(ABOUT_LABEL), icon: s!(ABOUT_ICON), target: Target::About });
        out
    }

    pub fn labels(&self) -> Vec<String> {
        self.menu().into_iter().map(|e| e.label).collect()
    }

    fn target_for(&self, label: &str) -> Option<Target> {
        self.menu().into_iter().find(|e| e.label == label).map(|e| e.target)
    }

    pub fn dispatch(&self, label: &str, frame: &mut Frame) -> Dispatch {
        match self.target_for(label) {
            Some(Target::Home) => {
                self.resolver.render_or(WELCOME_MODULE, WELCOME_FN, frame, |f| f.heading(2, "Welcome"));
                Dispatch::Home
            }
            Some(Target::About) => {
                self.resolver.render_or(ABOUT_MODULE, ABOUT_FN, frame, |f| f.heading(2, "About"));
                Dispatch::About
            }
            Some(Target::Page(kind)) => {
                // target_for only yields kinds that are in the catalog
                let Some(spec) = self.catalog.iter().find(|s| s.kind == kind) else {
                    return Dispatch::Unavailable;
                };
                Dispatch::Page(self.resolver.resolve(spec, frame))
            }
            None => {
                logd!("Router: '{label}' is not in the menu");
                frame.info(UNAVAILABLE_MSG);
                Dispatch::Unavailable
            }
        }
    }
}

/// Two states: nothing rendered yet, or the last selection's output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Nav {
    #[default]
    MenuShown,
    PageRendered { label: String, frame: Frame },
}

impl Nav {
    pub fn current_label(&self) -> Option<&str> {
        match self {
            Nav::MenuShown => None,
            Nav::PageRendered { label, .. } => Some(label),
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Nav::MenuShown => None,
            Nav::PageRendered { frame, .. } => Some(frame),
        }
    }

    /// Render `label` unless it is already the page on screen.
    /// Returns true when a dispatch happened.
    pub fn select(&mut self, router: &Router, label: &str) -> bool {
        if self.current_label() == Some(label) {
            return false;
        }
        self.render(router, label);
        true
    }

    /// Run the current page again.
    pub fn reload(&mut self, router: &Router) {
        if let Some(label) = self.current_label().map(str::to_owned) {
            self.render(router, &label);
        }
    }

    fn render(&mut self, router: &Router, label: &str) {
        let mut frame = Frame::new();
        let result = router.dispatch(label, &mut frame);
        logf!("UI: '{label}' → {:?}", result);
        *self = Nav::PageRendered { label: s!(label), frame };
    }
}
