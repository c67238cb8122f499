//! Page-level interaction state: navigation, header, reveal, media, parallax
//!
//! Everything that used to be loose page-global flags lives on
//! [`PageEffects`], which the view owns and passes to its event handlers.

mod counter;
mod header;
mod media;
mod menu;
mod parallax;
mod reveal;

pub use counter::{ease_out_cubic, StatCounter, COUNTER_DURATION_MS};
pub use header::{
    active_section, anchor_id, scroll_target, FrameTicker, HeaderState, SectionBounds,
    ACTIVE_SECTION_OFFSET_PX, HEADER_SCROLL_THRESHOLD_PX,
};
pub use media::{
    ImageFallback, LazyImage, PlaybackCommand, VideoVisibility, FALLBACK_ALT,
    FALLBACK_BACKGROUND, LAZY_IMAGE_ROOT_MARGIN, LAZY_IMAGE_THRESHOLD, VIDEO_PLAY_RATIO,
};
pub use menu::{ClickTarget, NavMenu, MOBILE_BREAKPOINT_PX};
pub use parallax::{Parallax, DEFAULT_PARALLAX_SPEED};
pub use reveal::{RevealState, REVEAL_ROOT_MARGIN, REVEAL_STAGGER_SECS, REVEAL_THRESHOLD};

/// Visibility threshold that starts a stat counter
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Interaction state of one mounted page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageEffects {
    pub menu: NavMenu,
    pub header: HeaderState,
    pub parallax: Parallax,
    pub ticker: FrameTicker,
    /// Set once the page is mounted; fades the page in
    pub loaded: bool,
}

impl PageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class of the page wrapper
    pub fn page_class(&self) -> &'static str {
        if self.loaded {
            "page page-loaded"
        } else {
            "page"
        }
    }

    /// Apply one coalesced scroll frame
    pub fn apply_scroll(&mut self, scroll_y: f64, header_height: f64, sections: &[SectionBounds]) {
        self.header.update(scroll_y, header_height, sections);
        self.parallax.on_scroll(scroll_y);
        self.ticker.complete();
    }

    /// Viewport size or motion preference changed.
    ///
    /// Returns true when the menu was closed.
    pub fn apply_resize(&mut self, viewport_width: f64, reduced_motion: bool) -> bool {
        self.parallax.configure(viewport_width, reduced_motion);
        self.menu.on_resize(viewport_width)
    }
}
