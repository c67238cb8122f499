//! Test helpers shared across unit tests

pub mod fixtures;

pub use fixtures::{accepting_submitter, failing_submitter, LocalStore, StalledSubmitter};
