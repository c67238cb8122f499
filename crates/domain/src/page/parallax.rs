//! Parallax background offset

use super::menu::MOBILE_BREAKPOINT_PX;

/// Default speed factor of a background layer
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;

/// Parallax layer driven by the page scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    enabled: bool,
    speed: f64,
    offset: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLAX_SPEED)
    }
}

impl Parallax {
    pub fn new(speed: f64) -> Self {
        Self {
            enabled: true,
            speed,
            offset: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Parallax runs on wide viewports unless reduced motion is requested
    pub fn configure(&mut self, viewport_width: f64, reduced_motion: bool) {
        self.enabled = viewport_width > MOBILE_BREAKPOINT_PX && !reduced_motion;
        if !self.enabled {
            self.offset = 0.0;
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.offset = if self.enabled {
            -scroll_y * self.speed
        } else {
            0.0
        };
    }

    pub fn style(&self) -> String {
        format!("transform: translate3d(0, {:.1}px, 0);", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_follows_scroll() {
        let mut layer = Parallax::new(0.5);
        layer.on_scroll(200.0);
        assert_eq!(layer.offset(), -100.0);
        assert_eq!(layer.style(), "transform: translate3d(0, -100.0px, 0);");
    }

    #[test]
    fn test_disabled_on_small_screens() {
        let mut layer = Parallax::default();
        layer.on_scroll(100.0);
        layer.configure(375.0, false);
        assert!(!layer.is_enabled());
        assert_eq!(layer.offset(), 0.0);
        layer.on_scroll(500.0);
        assert_eq!(layer.offset(), 0.0);
    }

    #[test]
    fn test_disabled_for_reduced_motion() {
        let mut layer = Parallax::default();
        layer.configure(1440.0, true);
        assert!(!layer.is_enabled());
        layer.configure(1440.0, false);
        assert!(layer.is_enabled());
    }
}
