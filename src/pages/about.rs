// src/pages/about.rs
use crate::config::consts::{ABOUT_FN, ABOUT_MODULE};
use crate::core::Module;

pub fn module() -> Module {
    Module::new(ABOUT_MODULE).export(ABOUT_FN, |frame| {
        frame.heading(1, "About");
        frame.text(
            "This dashboard is a shell around independent analysis pages. \
             Each page is either a registered module or a standalone script \
             found under the dashboard root.",
        );
        frame.text(format!("Version {}", env!("CARGO_PKG_VERSION")));
        Ok(())
    })
}
