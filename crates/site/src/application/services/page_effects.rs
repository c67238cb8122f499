//! Page Effects - navigation menu, header scroll state and visibility effects
//!
//! [`PageEffectsService`] owns the window listeners of the page. The
//! `observe_*` helpers wire one element's intersection reports to its state
//! in a store; [`animate_counter`] runs a stat counter's count-up.

use std::sync::Arc;

use iwe_domain::page::{
    anchor_id, scroll_target, ClickTarget, LazyImage, PlaybackCommand, RevealState, StatCounter,
    VideoVisibility, COUNTER_THRESHOLD, LAZY_IMAGE_ROOT_MARGIN, LAZY_IMAGE_THRESHOLD,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use iwe_domain::PageEffects;

use crate::application::store::StateStore;
use crate::ports::outbound::{PlatformPort, VisibilityOptions, WindowEvent};

/// DOM ids the page layout provides
pub const HEADER_ID: &str = "header";
pub const BURGER_ID: &str = "burger";

/// Delay between counter frames (~60 fps)
pub const COUNTER_FRAME_MS: u64 = 16;

#[derive(Clone)]
pub struct PageEffectsService<S> {
    store: S,
    platform: Arc<dyn PlatformPort>,
}

impl<S: StateStore<PageEffects>> PageEffectsService<S> {
    pub fn new(store: S, platform: Arc<dyn PlatformPort>) -> Self {
        Self { store, platform }
    }

    /// Mark the page loaded, apply the initial viewport and register scroll,
    /// resize and Escape listeners for the page's lifetime
    pub fn install(&self) {
        self.store.update(|page| page.loaded = true);
        self.on_resize();
        self.frame();

        let this = self.clone();
        self.platform
            .on_window_event(WindowEvent::Scroll, Box::new(move || this.on_scroll()));
        let this = self.clone();
        self.platform
            .on_window_event(WindowEvent::Resize, Box::new(move || this.on_resize()));
        let this = self.clone();
        self.platform
            .on_window_event(WindowEvent::Escape, Box::new(move || this.on_escape()));

        tracing::info!("Page effects initialized");
    }

    /// Scroll event: schedule one frame update unless one is pending
    pub fn on_scroll(&self) {
        if self.store.update(|page| page.ticker.request()) != Some(true) {
            return;
        }
        let this = self.clone();
        self.platform
            .request_animation_frame(Box::new(move || this.frame()));
    }

    /// Recompute header state and parallax offset from the current scroll
    pub fn frame(&self) {
        let scroll_y = self.platform.scroll_y();
        let header_height = self.header_height();
        let sections = self.platform.section_bounds();
        self.store
            .update(|page| page.apply_scroll(scroll_y, header_height, &sections));
    }

    pub fn on_resize(&self) {
        let width = self.platform.viewport_width();
        let reduced_motion = self.platform.prefers_reduced_motion();
        if self.store.update(|page| page.apply_resize(width, reduced_motion)) == Some(true) {
            self.sync_body_overflow();
        }
    }

    /// Escape closes the menu and hands focus back to the burger
    pub fn on_escape(&self) {
        if self.store.update(|page| page.menu.on_escape()) == Some(true) {
            self.sync_body_overflow();
            self.platform.focus_element(BURGER_ID);
        }
    }

    pub fn toggle_menu(&self) {
        self.store.update(|page| page.menu.toggle());
        self.sync_body_overflow();
    }

    /// A click anywhere on the document
    pub fn on_click(&self, target: ClickTarget) {
        if self.store.update(|page| page.menu.on_click(target)) == Some(true) {
            self.sync_body_overflow();
        }
    }

    /// Nav link clicked. Closes the menu and, for in-page anchors, scrolls
    /// the target below the header.
    ///
    /// Returns true for every in-page anchor, found or not; the caller then
    /// suppresses the browser's own jump.
    pub fn navigate(&self, href: &str) -> bool {
        if self.store.update(|page| page.menu.close()) == Some(true) {
            self.sync_body_overflow();
        }

        if !href.starts_with('#') {
            return false;
        }
        let Some(id) = anchor_id(href) else {
            return true;
        };
        let Some(target) = self.platform.element_bounds(id) else {
            tracing::debug!(anchor = %id, "Anchor target not found");
            return true;
        };

        let top = scroll_target(target.top, self.platform.scroll_y(), self.header_height());
        self.platform.scroll_to(top);
        true
    }

    fn header_height(&self) -> f64 {
        self.platform
            .element_bounds(HEADER_ID)
            .map(|b| b.height)
            .unwrap_or(0.0)
    }

    fn sync_body_overflow(&self) {
        if let Some(overflow) = self.store.read(|page| page.menu.body_overflow()) {
            self.platform.set_body_overflow(overflow);
        }
    }
}

/// Reveal `element_id` on its first intersection
pub fn observe_reveal<S>(platform: &dyn PlatformPort, element_id: &str, store: S)
where
    S: StateStore<RevealState>,
{
    let options = VisibilityOptions::new(REVEAL_THRESHOLD)
        .with_root_margin(REVEAL_ROOT_MARGIN)
        .once();
    platform.observe_visibility(
        element_id,
        options,
        Box::new(move |visibility| {
            if visibility.intersecting {
                store.update(|reveal| reveal.on_visible());
            }
        }),
    );
}

/// Swap in the real image source on the first intersection
pub fn observe_lazy_image<S>(platform: &dyn PlatformPort, element_id: &str, store: S)
where
    S: StateStore<LazyImage>,
{
    let options = VisibilityOptions::new(LAZY_IMAGE_THRESHOLD)
        .with_root_margin(LAZY_IMAGE_ROOT_MARGIN)
        .once();
    let id = element_id.to_string();
    platform.observe_visibility(
        element_id,
        options,
        Box::new(move |visibility| {
            if visibility.intersecting && store.update(|image| image.load()) == Some(true) {
                tracing::trace!(image = %id, "Lazy image loaded");
            }
        }),
    );
}

/// Play the video while at least half of it is visible
pub fn observe_video<S>(platform: Arc<dyn PlatformPort>, element_id: &str, store: S)
where
    S: StateStore<VideoVisibility>,
{
    let options = VisibilityOptions::new(iwe_domain::page::VIDEO_PLAY_RATIO);
    let id = element_id.to_string();
    let port = platform.clone();
    platform.observe_visibility(
        element_id,
        options,
        Box::new(move |visibility| {
            let ratio = if visibility.intersecting {
                visibility.ratio
            } else {
                0.0
            };
            match store.update(|video| video.on_ratio(ratio)).flatten() {
                Some(PlaybackCommand::Play) => port.set_media_playing(&id, true),
                Some(PlaybackCommand::Pause) => port.set_media_playing(&id, false),
                None => {}
            }
        }),
    );
}

/// Run `on_start` the first time a stat counter is half visible
pub fn observe_counter(
    platform: &dyn PlatformPort,
    element_id: &str,
    on_start: impl FnOnce() + 'static,
) {
    let mut on_start = Some(on_start);
    platform.observe_visibility(
        element_id,
        VisibilityOptions::new(COUNTER_THRESHOLD).once(),
        Box::new(move |visibility| {
            if visibility.intersecting {
                if let Some(start) = on_start.take() {
                    start();
                }
            }
        }),
    );
}

/// Count up from zero to the counter's final text over two seconds.
///
/// `on_frame` receives every intermediate text and finally the original one.
/// Texts without digits are left untouched.
pub async fn animate_counter(
    platform: Arc<dyn PlatformPort>,
    text: &str,
    mut on_frame: impl FnMut(String),
) {
    let Some(counter) = StatCounter::parse(text) else {
        return;
    };

    let started = platform.now_millis();
    loop {
        let elapsed = platform.now_millis().saturating_sub(started) as f64;
        let (frame, done) = counter.frame(elapsed);
        on_frame(frame);
        if done {
            break;
        }
        platform.sleep_ms(COUNTER_FRAME_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::infrastructure::testing::LocalStore;
    use crate::ports::outbound::Visibility;
    use iwe_domain::page::SectionBounds;

    type Store = LocalStore<PageEffects>;

    fn service(mock: &MockPlatform) -> (PageEffectsService<Store>, Store) {
        let store = LocalStore::new(PageEffects::new());
        (PageEffectsService::new(store.clone(), mock.port()), store)
    }

    fn visible(ratio: f64) -> Visibility {
        Visibility {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_install_registers_listeners_and_applies_viewport() {
        let mock = MockPlatform::new();
        mock.set_viewport_width(500.0);
        let (service, store) = service(&mock);

        service.install();

        assert_eq!(mock.listener_count(WindowEvent::Scroll), 1);
        assert_eq!(mock.listener_count(WindowEvent::Resize), 1);
        assert_eq!(mock.listener_count(WindowEvent::Escape), 1);
        assert!(!store.get().parallax.is_enabled());
        assert_eq!(store.get().page_class(), "page page-loaded");
    }

    #[test]
    fn test_scroll_updates_header_and_active_section() {
        let mock = MockPlatform::new();
        mock.set_element(HEADER_ID, 0.0, 80.0);
        mock.set_sections(vec![
            SectionBounds::new("hero", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 600.0),
        ]);
        let (service, store) = service(&mock);
        service.install();

        mock.set_scroll_y(600.0);
        mock.emit(WindowEvent::Scroll);

        let page = store.get();
        assert!(page.header.scrolled);
        assert_eq!(page.header.active_section.as_deref(), Some("about"));
        assert_eq!(page.header.link_class("#about"), "nav__link nav__link--active");
        assert_eq!(page.parallax.offset(), -600.0 * 0.3);
        assert_eq!(mock.frames_requested(), 1);
    }

    #[test]
    fn test_pending_frame_coalesces_scroll_events() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);
        store.update(|page| page.ticker.request());

        service.on_scroll();
        service.on_scroll();

        assert_eq!(mock.frames_requested(), 0);
    }

    #[test]
    fn test_menu_toggle_locks_body_scroll() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);

        service.toggle_menu();
        assert!(store.get().menu.is_open());
        assert_eq!(mock.body_overflow(), "hidden");

        service.toggle_menu();
        assert!(!store.get().menu.is_open());
        assert_eq!(mock.body_overflow(), "");
    }

    #[test]
    fn test_escape_closes_menu_and_focuses_burger() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);
        service.install();
        service.toggle_menu();

        mock.emit(WindowEvent::Escape);

        assert!(!store.get().menu.is_open());
        assert_eq!(mock.body_overflow(), "");
        assert_eq!(mock.focused(), vec![BURGER_ID.to_string()]);
    }

    #[test]
    fn test_escape_with_closed_menu_keeps_focus() {
        let mock = MockPlatform::new();
        let (service, _) = service(&mock);

        service.on_escape();

        assert!(mock.focused().is_empty());
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);
        service.toggle_menu();

        service.on_click(ClickTarget::Nav);
        assert!(store.get().menu.is_open());

        service.on_click(ClickTarget::Outside);
        assert!(!store.get().menu.is_open());
        assert_eq!(mock.body_overflow(), "");
    }

    #[test]
    fn test_resize_past_breakpoint_closes_menu() {
        let mock = MockPlatform::new();
        mock.set_viewport_width(400.0);
        let (service, store) = service(&mock);
        service.install();
        service.toggle_menu();

        mock.set_viewport_width(1024.0);
        mock.emit(WindowEvent::Resize);

        assert!(!store.get().menu.is_open());
        assert!(store.get().parallax.is_enabled());
        assert_eq!(mock.body_overflow(), "");
    }

    #[test]
    fn test_reduced_motion_disables_parallax() {
        let mock = MockPlatform::new();
        mock.set_viewport_width(1280.0);
        mock.set_reduced_motion(true);
        let (service, store) = service(&mock);
        service.install();

        mock.set_scroll_y(500.0);
        mock.emit(WindowEvent::Scroll);

        let page = store.get();
        assert!(!page.parallax.is_enabled());
        assert_eq!(page.parallax.offset(), 0.0);
        assert!(page.header.scrolled);
    }

    #[test]
    fn test_navigate_scrolls_below_header() {
        let mock = MockPlatform::new();
        mock.set_element(HEADER_ID, 0.0, 80.0);
        mock.set_element("contact", 1200.0, 500.0);
        mock.set_scroll_y(300.0);
        let (service, store) = service(&mock);
        service.toggle_menu();

        assert!(service.navigate("#contact"));

        assert!(!store.get().menu.is_open());
        assert_eq!(mock.scrolled_to(), vec![1200.0 + 300.0 - 80.0]);
    }

    #[test]
    fn test_navigate_external_link_only_closes_menu() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);
        service.toggle_menu();

        assert!(!service.navigate("https://t.me/iwe"));

        assert!(!store.get().menu.is_open());
        assert!(mock.scrolled_to().is_empty());
    }

    #[test]
    fn test_navigate_missing_anchor_is_still_handled() {
        let mock = MockPlatform::new();
        let (service, store) = service(&mock);
        service.toggle_menu();

        assert!(service.navigate("#missing"));
        assert!(service.navigate("#"));

        assert!(!store.get().menu.is_open());
        assert!(mock.scrolled_to().is_empty());
    }

    #[test]
    fn test_reveal_happens_once() {
        let mock = MockPlatform::new();
        let store = LocalStore::new(RevealState::new(2));
        observe_reveal(&mock.platform(), "reveal-2", store.clone());

        let (_, options) = mock.observed().remove(0);
        assert_eq!(options.threshold, REVEAL_THRESHOLD);
        assert_eq!(options.root_margin, REVEAL_ROOT_MARGIN);
        assert!(options.once);

        mock.emit_visibility("reveal-2", visible(0.0));
        assert!(!store.get().is_revealed());
        mock.emit_visibility("reveal-2", visible(0.2));
        assert!(store.get().is_revealed());
    }

    #[test]
    fn test_lazy_image_loads_on_intersection() {
        let mock = MockPlatform::new();
        let store = LocalStore::new(LazyImage::new("/img/portrait.jpg"));
        observe_lazy_image(&mock.platform(), "img-portrait", store.clone());

        mock.emit_visibility("img-portrait", visible(0.05));

        let image = store.get();
        assert_eq!(image.src(), Some("/img/portrait.jpg"));
        assert_eq!(image.class_name(), "loaded");
    }

    #[test]
    fn test_video_plays_and_pauses_without_repeats() {
        let mock = MockPlatform::new();
        let store = LocalStore::new(VideoVisibility::default());
        observe_video(mock.port(), "promo", store);

        mock.emit_visibility("promo", visible(0.2));
        mock.emit_visibility("promo", visible(0.6));
        mock.emit_visibility("promo", visible(0.9));
        mock.emit_visibility("promo", visible(0.1));
        mock.emit_visibility("promo", visible(0.0));

        assert_eq!(
            mock.media_commands(),
            vec![("promo".to_string(), true), ("promo".to_string(), false)]
        );
    }

    #[test]
    fn test_counter_starts_once() {
        let mock = MockPlatform::new();
        let started = LocalStore::new(0usize);
        let counter = started.clone();
        observe_counter(&mock.platform(), "stat-1", move || {
            counter.update(|n| *n += 1);
        });

        mock.emit_visibility("stat-1", visible(0.6));
        mock.emit_visibility("stat-1", visible(0.7));

        assert_eq!(started.get(), 1);
    }

    #[tokio::test]
    async fn test_counter_counts_up_and_restores_text() {
        let mock = MockPlatform::new();
        let mut frames = Vec::new();

        animate_counter(mock.port(), "120+", |text| frames.push(text)).await;

        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("120+"));
        let values: Vec<u64> = frames
            .iter()
            .filter_map(|f| f.trim_end_matches('+').parse().ok())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(mock.sleeps().iter().all(|ms| *ms == COUNTER_FRAME_MS));
    }

    #[tokio::test]
    async fn test_counter_without_digits_is_untouched() {
        let mock = MockPlatform::new();
        let mut frames = Vec::new();

        animate_counter(mock.port(), "много", |text| frames.push(text)).await;

        assert!(frames.is_empty());
        assert!(mock.sleeps().is_empty());
    }
}
