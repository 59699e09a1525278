// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod menu;
pub mod theme;
pub mod view;

pub use app::run;
