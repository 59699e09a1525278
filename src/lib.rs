// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod pages;
pub mod router;
pub mod sync;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
