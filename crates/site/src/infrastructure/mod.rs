pub mod http_client;
pub mod platform;
pub mod simulated;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use platform::create_platform;

use std::future::Future;

/// Spawn a task on the UI runtime.
///
/// Tasks are scoped to the component that spawns them and are dropped with it.
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
