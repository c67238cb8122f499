//! Application layer: use cases behind the page's interactive islands
//!
//! Services depend on port traits and on [`store::StateStore`], never on a
//! concrete UI runtime, so they run unchanged against Dioxus signals and
//! against the plain stores used in tests.

pub mod services;
pub mod store;

pub use services::{FormController, FormVariant, PageEffectsService, SubmitOutcome};
pub use store::StateStore;
