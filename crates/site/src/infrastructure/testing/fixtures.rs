//! Simple test fixtures used across unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use iwe_domain::FormData;

use crate::application::store::StateStore;
use crate::ports::outbound::{FormSubmitPort, MockFormSubmitPort, SubmitError, SubmitReceipt};

/// Single-threaded store standing in for a UI signal
pub struct LocalStore<T>(Rc<RefCell<T>>);

impl<T> LocalStore<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalStore<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Clone + 'static> LocalStore<T> {
    /// Copy of the current value
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: 'static> StateStore<T> for LocalStore<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_borrow().ok().map(|value| f(&value))
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_borrow_mut().ok().map(|mut value| f(&mut value))
    }
}

/// Submitter that accepts exactly `times` sends
pub fn accepting_submitter(times: usize) -> MockFormSubmitPort {
    let mut mock = MockFormSubmitPort::new();
    mock.expect_send()
        .times(times)
        .returning(|_, _| Ok(SubmitReceipt::accepted()));
    mock
}

/// Submitter whose single send fails at the transport level
pub fn failing_submitter(reason: &str) -> MockFormSubmitPort {
    let reason = reason.to_string();
    let mut mock = MockFormSubmitPort::new();
    mock.expect_send()
        .times(1)
        .returning(move |_, _| Err(SubmitError::Transport(reason.clone())));
    mock
}

/// Submitter whose sends never complete
pub struct StalledSubmitter;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl FormSubmitPort for StalledSubmitter {
    async fn send(&self, _endpoint: &str, _data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        std::future::pending().await
    }
}
