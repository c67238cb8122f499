//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the application and UI layers. It abstracts the Platform DI
//! container so that services don't depend on infrastructure types.

use std::{future::Future, pin::Pin};

use iwe_domain::page::SectionBounds;

use super::{ElementBounds, Visibility, VisibilityOptions, WindowEvent};

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Focus the element with the given id
    fn focus_element(&self, element_id: &str);

    /// Lock or unlock page scrolling (`hidden` / empty)
    fn set_body_overflow(&self, value: &str);

    /// Play or pause a media element
    fn set_media_playing(&self, element_id: &str, playing: bool);

    // -------------------------------------------------------------------------
    // Viewport operations
    // -------------------------------------------------------------------------

    fn scroll_y(&self) -> f64;

    fn viewport_width(&self) -> f64;

    fn prefers_reduced_motion(&self) -> bool;

    fn scroll_to(&self, top: f64);

    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds>;

    fn section_bounds(&self) -> Vec<SectionBounds>;

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>);

    fn on_window_event(&self, event: WindowEvent, handler: Box<dyn FnMut()>);

    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        handler: Box<dyn FnMut(Visibility)>,
    );
}
