// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use eframe::egui::{IconData, ViewportBuilder};
use fraud_dash::{
    config::{consts::*, DashConfig},
    core::Frame,
    dashboard::Dashboard,
    error::report,
    gui,
};

/// Optional window icon; a bad or missing file just means the default icon.
fn app_icon(path: &Path) -> Option<IconData> {
    let rgba = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            fraud_dash::logw!("Icon: {} not loaded ({})", path.display(), e);
            return None;
        }
    };
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let config_path = std::env::var_os("FRAUD_DASH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut notices = Frame::new();
    let config = match DashConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            notices.warning(format!("Config ignored: {}", report(&e)));
            DashConfig::default()
        }
    };

    if let Err(e) = fraud_dash::log::init(&config.log_file) {
        eprintln!("Logging disabled: {e}");
    }

    let mut viewport = ViewportBuilder::default()
        .with_title(config.title.clone())
        .with_inner_size([WINDOW_W, WINDOW_H]);
    if let Some(icon) = config.icon.as_deref().and_then(app_icon) {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    let dash = Dashboard::start(config, notices);

    if let Err(e) = gui::run(dash, options) {
        fraud_dash::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
