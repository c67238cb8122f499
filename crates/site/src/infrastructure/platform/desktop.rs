//! Desktop platform implementations
//!
//! The desktop build renders the same components in a native window for
//! local preview. There is no page scroll to track, so viewport operations
//! report a static wide window and element visibility is immediate.

use iwe_domain::page::SectionBounds;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, ElementBounds, SleepProvider, TimeProvider, ViewportProvider, Visibility,
    VisibilityOptions, WindowEvent,
};
use crate::state::Platform;

/// Window width reported when `IWE_VIEWPORT_WIDTH` is not set
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop document provider
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is managed by OS/Dioxus desktop
    }

    fn focus_element(&self, element_id: &str) {
        tracing::debug!(element_id, "Focus request ignored on desktop");
    }

    fn set_body_overflow(&self, _value: &str) {}

    fn set_media_playing(&self, element_id: &str, playing: bool) {
        tracing::debug!(element_id, playing, "Media playback ignored on desktop");
    }
}

/// Desktop viewport provider: fixed-size window, no scrolling
#[derive(Clone)]
pub struct DesktopViewportProvider {
    width: f64,
}

impl Default for DesktopViewportProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopViewportProvider {
    pub fn new() -> Self {
        let width = std::env::var("IWE_VIEWPORT_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
        Self { width }
    }
}

impl ViewportProvider for DesktopViewportProvider {
    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn scroll_to(&self, top: f64) {
        tracing::debug!(top, "Scroll request ignored on desktop");
    }

    fn element_bounds(&self, _element_id: &str) -> Option<ElementBounds> {
        None
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        Vec::new()
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        callback();
    }

    fn on_window_event(&self, event: WindowEvent, _handler: Box<dyn FnMut()>) {
        tracing::debug!(?event, "Window listeners are not installed on desktop");
    }

    fn observe_visibility(
        &self,
        _element_id: &str,
        _options: VisibilityOptions,
        mut handler: Box<dyn FnMut(Visibility)>,
    ) {
        handler(Visibility {
            intersecting: true,
            ratio: 1.0,
        });
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopSleepProvider,
        DesktopDocumentProvider,
        DesktopViewportProvider::new(),
    )
}
