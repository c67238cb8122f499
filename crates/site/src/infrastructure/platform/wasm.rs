//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys and gloo-timers.

use iwe_domain::page::SectionBounds;
use std::{future::Future, pin::Pin};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    HtmlElement, HtmlMediaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions,
};

use crate::ports::outbound::platform::{
    DocumentProvider, ElementBounds, SleepProvider, TimeProvider, ViewportProvider, Visibility,
    VisibilityOptions, WindowEvent,
};
use crate::state::Platform;

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

fn html_element(element_id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// WASM time provider using js_sys::Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = document() {
            document.set_title(title);
        }
    }

    fn focus_element(&self, element_id: &str) {
        match html_element(element_id) {
            Some(element) => {
                if let Err(e) = element.focus() {
                    tracing::warn!(element_id, "Failed to focus element: {:?}", e);
                }
            }
            None => tracing::warn!(element_id, "Focus target not found"),
        }
    }

    fn set_body_overflow(&self, value: &str) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::warn!("Failed to set body overflow: {:?}", e);
        }
    }

    fn set_media_playing(&self, element_id: &str, playing: bool) {
        let Some(media) = document()
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|e| e.dyn_into::<HtmlMediaElement>().ok())
        else {
            tracing::warn!(element_id, "Media element not found");
            return;
        };

        let result = if playing {
            // Autoplay may be refused; the returned promise is not awaited
            media.play().map(|_| ())
        } else {
            media.pause()
        };
        if let Err(e) = result {
            tracing::warn!(element_id, playing, "Media playback change failed: {:?}", e);
        }
    }
}

/// WASM viewport provider backed by the browser window
#[derive(Clone, Default)]
pub struct WasmViewportProvider;

impl ViewportProvider for WasmViewportProvider {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    fn scroll_to(&self, top: f64) {
        let Some(window) = window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn element_bounds(&self, element_id: &str) -> Option<ElementBounds> {
        let rect = document()?
            .get_element_by_id(element_id)?
            .get_bounding_client_rect();
        Some(ElementBounds {
            top: rect.top(),
            height: rect.height(),
        })
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok())
        else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = window() else {
            callback();
            return;
        };
        let js_callback = Closure::once_into_js(move || callback());
        if let Err(e) = window.request_animation_frame(js_callback.unchecked_ref()) {
            tracing::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn on_window_event(&self, event: WindowEvent, mut handler: Box<dyn FnMut()>) {
        let Some(window) = window() else {
            return;
        };

        let (name, closure) = match event {
            WindowEvent::Scroll => (
                "scroll",
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler()),
            ),
            WindowEvent::Resize => (
                "resize",
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler()),
            ),
            WindowEvent::Escape => (
                "keydown",
                Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
                    let is_escape = e
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|k| k.key() == "Escape");
                    if is_escape {
                        handler();
                    }
                }),
            ),
        };

        match window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
            // Listeners live as long as the page
            Ok(()) => closure.forget(),
            Err(e) => tracing::error!(event = name, "Failed to add window listener: {:?}", e),
        }
    }

    fn observe_visibility(
        &self,
        element_id: &str,
        options: VisibilityOptions,
        mut handler: Box<dyn FnMut(Visibility)>,
    ) {
        let Some(window) = window() else {
            return;
        };
        let Some(element) = document().and_then(|d| d.get_element_by_id(element_id)) else {
            tracing::warn!(element_id, "Visibility target not found");
            return;
        };

        let supported =
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);
        if !supported {
            handler(Visibility {
                intersecting: true,
                ratio: 1.0,
            });
            return;
        }

        let once = options.once;
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let visibility = Visibility {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    handler(visibility);
                    if once && visibility.intersecting {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                callback.forget();
            }
            Err(e) => tracing::error!(element_id, "Failed to create IntersectionObserver: {:?}", e),
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmDocumentProvider,
        WasmViewportProvider,
    )
}
