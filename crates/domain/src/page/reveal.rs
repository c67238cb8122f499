//! Fade-in of page blocks as they scroll into view

/// Per-element delay step of the staggered transition (seconds)
pub const REVEAL_STAGGER_SECS: f64 = 0.1;

/// Observer settings for reveal targets
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// A block that fades in once, the first time it becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    index: usize,
    revealed: bool,
}

impl RevealState {
    /// `index` is the element's position among all reveal targets
    pub fn new(index: usize) -> Self {
        Self {
            index,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true on the first intersection only
    pub fn on_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }

    pub fn style(&self) -> String {
        let delay = self.index as f64 * REVEAL_STAGGER_SECS;
        let (opacity, offset) = if self.revealed { (1, 0) } else { (0, 30) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity 0.6s ease {delay:.1}s, transform 0.6s ease {delay:.1}s;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_style_is_hidden_with_stagger() {
        let state = RevealState::new(3);
        assert_eq!(
            state.style(),
            "opacity: 0; transform: translateY(30px); \
             transition: opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s;"
        );
    }

    #[test]
    fn test_reveals_once() {
        let mut state = RevealState::new(0);
        assert!(state.on_visible());
        assert!(!state.on_visible());
        assert!(state.is_revealed());
        assert!(state.style().starts_with("opacity: 1; transform: translateY(0px);"));
    }
}
