// src/gui/components/mod.rs
pub mod sidebar;
