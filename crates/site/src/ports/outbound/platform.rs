//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract browser/desktop specifics so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

use iwe_domain::page::SectionBounds;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in application code (banner timers,
/// counter frames, simulated network latency).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Browser document operations
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Move keyboard focus to the element with the given id
    fn focus_element(&self, element_id: &str);

    /// Set `document.body.style.overflow`
    fn set_body_overflow(&self, value: &str);

    /// Play or pause the `<video>`/`<audio>` element with the given id
    fn set_media_playing(&self, element_id: &str, playing: bool);
}

/// Window-level events the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Scroll,
    Resize,
    /// `keydown` with key `Escape`
    Escape,
}

/// Viewport-relative box of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

/// IntersectionObserver settings
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: String,
    /// Stop observing after the first intersection
    pub once: bool,
}

impl VisibilityOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px".to_string(),
            once: false,
        }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

/// One intersection report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

/// Scroll position, viewport geometry and window listeners
pub trait ViewportProvider: Clone + 'static {
    /// `window.scrollY`
    fn scroll_y(&self) -> f64;

    /// `window.innerWidth`
    fn viewport_width(&self) -> f64;

    /// `(prefers-reduced-motion: reduce)`
    fn prefers_reduced_motion(&self) -> bool;

    /// Smooth-scroll the window to `top`
    fn scroll_to(&self, top: f64);

    /// Box of the element with the given id, relative to the viewport
    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds>;

    /// Document-relative boxes of every `section[id]`, in document order
    fn section_bounds(&self) -> Vec<SectionBounds>;

    /// Run `callback` before the next repaint (immediately where there is none)
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>);

    /// Register a listener for the page's lifetime
    fn on_window_event(&self, event: WindowEvent, handler: Box<dyn FnMut()>);

    /// Report intersection changes of the element with the given id.
    ///
    /// Without observer support the element is reported visible once.
    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        handler: Box<dyn FnMut(Visibility)>,
    );
}
