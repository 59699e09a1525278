// src/config/consts.rs

// Files
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_TITLE: &str = "Fraud Detection";

// Always-present menu entries
pub const HOME_LABEL: &str = "Home";
pub const HOME_ICON: &str = "🏠";
pub const ABOUT_LABEL: &str = "About";
pub const ABOUT_ICON: &str = "ℹ";

// Built-in modules
pub const WELCOME_MODULE: &str = "pages.welcome";
pub const WELCOME_FN: &str = "show_welcome_page";
pub const ABOUT_MODULE: &str = "pages.about";
pub const ABOUT_FN: &str = "show_about_page";

pub const UNAVAILABLE_MSG: &str = "This page isn’t available yet.";

// Script interpreters by extension
pub const DEFAULT_INTERPRETERS: &[(&str, &str)] = &[
    ("py", "python3"),
    ("sh", "sh"),
];

// Window
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 780.0;
