//! Mobile navigation menu

use serde::{Deserialize, Serialize};

/// Viewports wider than this (px) show the desktop navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0;

/// Open/closed state of the burger menu and what the view derives from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavMenu {
    open: bool,
}

/// Where a click landed, relative to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Burger,
    Nav,
    Outside,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu; returns whether it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape closes an open menu. Returns true when focus should go back
    /// to the burger button.
    pub fn on_escape(&mut self) -> bool {
        self.close()
    }

    /// Clicks anywhere but the menu and its burger close it
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        target == ClickTarget::Outside && self.close()
    }

    /// Growing past the mobile breakpoint closes the menu
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        viewport_width > MOBILE_BREAKPOINT_PX && self.close()
    }

    pub fn burger_class(&self) -> &'static str {
        if self.open {
            "burger burger--active"
        } else {
            "burger"
        }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.open {
            "nav nav--open"
        } else {
            "nav"
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// Body style: scrolling is locked while the menu covers the page
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_derived_state() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.burger_class(), "burger burger--active");
        assert_eq!(menu.nav_class(), "nav nav--open");
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_hidden(), "false");
        assert_eq!(menu.body_overflow(), "hidden");

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_hidden(), "true");
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = NavMenu::default();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.close());
    }

    #[test]
    fn test_escape_refocuses_only_when_open() {
        let mut menu = NavMenu::default();
        assert!(!menu.on_escape());
        menu.toggle();
        assert!(menu.on_escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_clicks_keep_menu_open() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(!menu.on_click(ClickTarget::Nav));
        assert!(!menu.on_click(ClickTarget::Burger));
        assert!(menu.is_open());
        assert!(menu.on_click(ClickTarget::Outside));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(!menu.on_resize(767.0));
        assert!(menu.is_open());
        assert!(menu.on_resize(768.0));
        assert!(!menu.is_open());
    }
}
