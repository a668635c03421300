//! Shared library module for the 9-Box Puzzle Game app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod config;
pub mod scheduler;
pub mod state;
pub mod ui;
pub mod version;

pub use self::{app::NineBoxApp, config::HomepageConfig};
