//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Wrapped as `Arc<dyn PlatformPort>` and injected into Dioxus context by `main`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use iwe_domain::page::SectionBounds;

use crate::ports::outbound::{
    DocumentProvider, ElementBounds, PlatformPort, SleepProvider, TimeProvider, ViewportProvider,
    Visibility, VisibilityOptions, WindowEvent,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    viewport: Arc<dyn ViewportProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn focus_element(&self, element_id: &str);
    fn set_body_overflow(&self, value: &str);
    fn set_media_playing(&self, element_id: &str, playing: bool);
}

trait ViewportProviderDyn: Send + Sync {
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

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn focus_element(&self, element_id: &str) {
        DocumentProvider::focus_element(self, element_id)
    }
    fn set_body_overflow(&self, value: &str) {
        DocumentProvider::set_body_overflow(self, value)
    }
    fn set_media_playing(&self, element_id: &str, playing: bool) {
        DocumentProvider::set_media_playing(self, element_id, playing)
    }
}

impl<T: ViewportProvider + Send + Sync> ViewportProviderDyn for T {
    fn scroll_y(&self) -> f64 {
        ViewportProvider::scroll_y(self)
    }
    fn viewport_width(&self) -> f64 {
        ViewportProvider::viewport_width(self)
    }
    fn prefers_reduced_motion(&self) -> bool {
        ViewportProvider::prefers_reduced_motion(self)
    }
    fn scroll_to(&self, top: f64) {
        ViewportProvider::scroll_to(self, top)
    }
    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds> {
        ViewportProvider::element_bounds(self, element_id)
    }
    fn section_bounds(&self) -> Vec<SectionBounds> {
        ViewportProvider::section_bounds(self)
    }
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        ViewportProvider::request_animation_frame(self, callback)
    }
    fn on_window_event(&self, event: WindowEvent, handler: Box<dyn FnMut()>) {
        ViewportProvider::on_window_event(self, event, handler)
    }
    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        handler: Box<dyn FnMut(Visibility)>,
    ) {
        ViewportProvider::observe_visibility(self, element_id, options, handler)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, D, V>(time: Tm, sleep: Sl, document: D, viewport: V) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        V: ViewportProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            document: Arc::new(document),
            viewport: Arc::new(viewport),
        }
    }
}

// =============================================================================
// PlatformPort implementation - lets services and UI use the trait abstraction
// =============================================================================

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn focus_element(&self, element_id: &str) {
        self.document.focus_element(element_id)
    }

    fn set_body_overflow(&self, value: &str) {
        self.document.set_body_overflow(value)
    }

    fn set_media_playing(&self, element_id: &str, playing: bool) {
        self.document.set_media_playing(element_id, playing)
    }

    fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.viewport_width()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.viewport.prefers_reduced_motion()
    }

    fn scroll_to(&self, top: f64) {
        self.viewport.scroll_to(top)
    }

    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds> {
        self.viewport.element_bounds(element_id)
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.viewport.section_bounds()
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        self.viewport.request_animation_frame(callback)
    }

    fn on_window_event(&self, event: WindowEvent, handler: Box<dyn FnMut()>) {
        self.viewport.on_window_event(event, handler)
    }

    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        handler: Box<dyn FnMut(Visibility)>,
    ) {
        self.viewport.observe_visibility(element_id, options, handler)
    }
}
