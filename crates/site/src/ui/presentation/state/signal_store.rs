//! [`StateStore`] over a Dioxus signal

use dioxus::prelude::*;

use crate::application::StateStore;

/// A signal handed to application services.
///
/// Reads and writes fail softly once the owning component is dropped.
pub struct SignalStore<T: 'static>(Signal<T>);

impl<T: 'static> SignalStore<T> {
    pub fn new(signal: Signal<T>) -> Self {
        Self(signal)
    }
}

impl<T: 'static> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalStore<T> {}

impl<T: 'static> StateStore<T> for SignalStore<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_read().ok().map(|value| f(&*value))
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        #[allow(unused_mut)]
        let mut signal = self.0;
        signal.try_write().ok().map(|mut value| f(&mut *value))
    }
}
