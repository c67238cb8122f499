//! Reactive state glue between Dioxus signals and application services

pub mod page_state;
pub mod signal_store;

pub use page_state::{use_page_effects, PageState};
pub use signal_store::SignalStore;
