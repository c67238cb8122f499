//! Header scroll state, active section and anchor scrolling

use serde::{Deserialize, Serialize};

/// Scroll distance (px) after which the header switches to its compact look
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Extra look-ahead (px) below the header when picking the active section
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// Document-relative box of a `section[id]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Scroll-derived header state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderState {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

impl HeaderState {
    /// Recompute from the current scroll offset.
    ///
    /// The active section keeps its previous value when no section contains
    /// the probe line, so the highlight does not flicker between sections.
    pub fn update(&mut self, scroll_y: f64, header_height: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
        if let Some(id) = active_section(scroll_y, header_height, sections) {
            self.active_section = Some(id.to_string());
        }
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "header header--scrolled"
        } else {
            "header"
        }
    }

    /// Class of the nav link pointing at `href`
    pub fn link_class(&self, href: &str) -> &'static str {
        let active = self
            .active_section
            .as_deref()
            .is_some_and(|id| href.strip_prefix('#') == Some(id));
        if active {
            "nav__link nav__link--active"
        } else {
            "nav__link"
        }
    }
}

/// Section under the probe line `scroll_y + header_height + 100`.
///
/// Sections are in document order; with overlapping boxes the last match wins.
pub fn active_section(scroll_y: f64, header_height: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + header_height + ACTIVE_SECTION_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Scroll offset that puts a target right below the fixed header
pub fn scroll_target(target_rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    target_rect_top + page_y_offset - header_height
}

/// Anchor id of an in-page link (`#about` -> `about`)
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Coalesces bursts of scroll events into one update per animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTicker {
    ticking: bool,
}

impl FrameTicker {
    /// Returns true when a frame callback should be scheduled
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.ticking, true)
    }

    /// Called from the frame callback
    pub fn complete(&mut self) {
        self.ticking = false;
    }
}
