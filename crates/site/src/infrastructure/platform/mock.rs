//! In-memory platform for tests
//!
//! All providers share one `MockPlatformState`. Sleeps complete immediately
//! and are recorded; window listeners and visibility handlers are stored so
//! tests can fire them with [`MockPlatform::emit`] and
//! [`MockPlatform::emit_visibility`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::{future::Future, pin::Pin};

use iwe_domain::page::SectionBounds;
use send_wrapper::SendWrapper;

use crate::ports::outbound::platform::{
    DocumentProvider, ElementBounds, SleepProvider, TimeProvider, ViewportProvider, Visibility,
    VisibilityOptions, WindowEvent,
};
use crate::ports::outbound::PlatformPort;
use crate::state::Platform;

type WindowHandler = SendWrapper<Box<dyn FnMut()>>;
type VisibilityHandler = SendWrapper<Box<dyn FnMut(Visibility)>>;

#[derive(Default)]
struct MockPlatformState {
    now_millis: u64,
    sleeps: Vec<u64>,
    focused: Vec<String>,
    body_overflow: String,
    media: Vec<(String, bool)>,
    scroll_y: f64,
    viewport_width: f64,
    reduced_motion: bool,
    scrolled_to: Vec<f64>,
    elements: HashMap<String, ElementBounds>,
    sections: Vec<SectionBounds>,
    frames_requested: usize,
    window_handlers: Vec<(WindowEvent, WindowHandler)>,
    visibility_handlers: Vec<(String, VisibilityOptions, VisibilityHandler)>,
}

type SharedState = Arc<Mutex<MockPlatformState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, MockPlatformState> {
    // A panicking test poisons the lock; later assertions still want the data
    state.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Clone)]
pub struct MockTimeProvider(SharedState);

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        lock(&self.0).now_millis
    }
}

#[derive(Clone)]
pub struct MockSleepProvider(SharedState);

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let mut state = lock(&self.0);
        state.sleeps.push(ms);
        // Sleeping advances the clock so time-driven loops terminate
        state.now_millis += ms;
        Box::pin(std::future::ready(()))
    }
}

#[derive(Clone)]
pub struct MockDocumentProvider(SharedState);

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, _title: &str) {}

    fn focus_element(&self, element_id: &str) {
        lock(&self.0).focused.push(element_id.to_string());
    }

    fn set_body_overflow(&self, value: &str) {
        lock(&self.0).body_overflow = value.to_string();
    }

    fn set_media_playing(&self, element_id: &str, playing: bool) {
        lock(&self.0).media.push((element_id.to_string(), playing));
    }
}

#[derive(Clone)]
pub struct MockViewportProvider(SharedState);

impl ViewportProvider for MockViewportProvider {
    fn scroll_y(&self) -> f64 {
        lock(&self.0).scroll_y
    }

    fn viewport_width(&self) -> f64 {
        lock(&self.0).viewport_width
    }

    fn prefers_reduced_motion(&self) -> bool {
        lock(&self.0).reduced_motion
    }

    fn scroll_to(&self, top: f64) {
        lock(&self.0).scrolled_to.push(top);
    }

    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds> {
        lock(&self.0).elements.get(element_id).copied()
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        lock(&self.0).sections.clone()
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        lock(&self.0).frames_requested += 1;
        callback();
    }

    fn on_window_event(&self, event: WindowEvent, handler: Box<dyn FnMut()>) {
        lock(&self.0)
            .window_handlers
            .push((event, SendWrapper::new(handler)));
    }

    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        handler: Box<dyn FnMut(Visibility)>,
    ) {
        lock(&self.0).visibility_handlers.push((
            element_id.to_string(),
            options,
            SendWrapper::new(handler),
        ));
    }
}

/// Handle to a mock platform and its recorded interactions
#[derive(Clone)]
pub struct MockPlatform {
    state: SharedState,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    pub fn new() -> Self {
        let state = MockPlatformState {
            viewport_width: 1280.0,
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Platform container wired to this mock
    pub fn platform(&self) -> Platform {
        Platform::new(
            MockTimeProvider(self.state.clone()),
            MockSleepProvider(self.state.clone()),
            MockDocumentProvider(self.state.clone()),
            MockViewportProvider(self.state.clone()),
        )
    }

    pub fn port(&self) -> Arc<dyn PlatformPort> {
        Arc::new(self.platform())
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    pub fn set_scroll_y(&self, value: f64) {
        lock(&self.state).scroll_y = value;
    }

    pub fn set_viewport_width(&self, value: f64) {
        lock(&self.state).viewport_width = value;
    }

    pub fn set_reduced_motion(&self, value: bool) {
        lock(&self.state).reduced_motion = value;
    }

    pub fn set_element(&self, element_id: &str, top: f64, height: f64) {
        lock(&self.state)
            .elements
            .insert(element_id.to_string(), ElementBounds { top, height });
    }

    pub fn set_sections(&self, sections: Vec<SectionBounds>) {
        lock(&self.state).sections = sections;
    }

    // -------------------------------------------------------------------------
    // Recorded interactions
    // -------------------------------------------------------------------------

    pub fn sleeps(&self) -> Vec<u64> {
        lock(&self.state).sleeps.clone()
    }

    pub fn focused(&self) -> Vec<String> {
        lock(&self.state).focused.clone()
    }

    pub fn body_overflow(&self) -> String {
        lock(&self.state).body_overflow.clone()
    }

    pub fn media_commands(&self) -> Vec<(String, bool)> {
        lock(&self.state).media.clone()
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        lock(&self.state).scrolled_to.clone()
    }

    pub fn frames_requested(&self) -> usize {
        lock(&self.state).frames_requested
    }

    pub fn listener_count(&self, event: WindowEvent) -> usize {
        lock(&self.state)
            .window_handlers
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }

    pub fn observed(&self) -> Vec<(String, VisibilityOptions)> {
        lock(&self.state)
            .visibility_handlers
            .iter()
            .map(|(id, options, _)| (id.clone(), options.clone()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Event injection
    // -------------------------------------------------------------------------

    /// Fire every listener registered for `event`.
    ///
    /// Handlers run outside the lock so they may call back into the platform.
    pub fn emit(&self, event: WindowEvent) {
        let mut handlers: Vec<(WindowEvent, WindowHandler)> =
            std::mem::take(&mut lock(&self.state).window_handlers);
        for (registered, handler) in handlers.iter_mut() {
            if *registered == event {
                (**handler)();
            }
        }
        let mut state = lock(&self.state);
        handlers.append(&mut state.window_handlers);
        state.window_handlers = handlers;
    }

    /// Report a visibility change for `element_id`
    pub fn emit_visibility(&self, element_id: &str, visibility: Visibility) {
        let mut handlers: Vec<(String, VisibilityOptions, VisibilityHandler)> =
            std::mem::take(&mut lock(&self.state).visibility_handlers);
        for (id, _, handler) in handlers.iter_mut() {
            if id == element_id {
                (**handler)(visibility);
            }
        }
        let mut state = lock(&self.state);
        handlers.append(&mut state.visibility_handlers);
        state.visibility_handlers = handlers;
    }
}
