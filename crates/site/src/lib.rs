//! IWE site client.
//!
//! UI, application logic, and infrastructure adapters of the site's
//! interactive parts. Multi-platform support is provided via compile-time
//! `cfg` selection: Dioxus web on wasm32, Dioxus desktop elsewhere.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform};
