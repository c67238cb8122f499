//! Animated statistic counters ("120+ clients" counting up from zero)

use std::sync::LazyLock;

use regex::Regex;

/// Length of the count-up animation (ms)
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// A counter parsed from its final text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    original: String,
    end_value: u64,
    suffix: String,
}

impl StatCounter {
    /// Parse the first run of digits; texts without one are not animated.
    ///
    /// Runs too long for a `u64` saturate.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = DIGITS_RE.find(text)?;
        let end_value = digits.as_str().parse().unwrap_or(u64::MAX);
        let suffix = text.replacen(digits.as_str(), "", 1);
        Some(Self {
            original: text.to_string(),
            end_value,
            suffix,
        })
    }

    pub fn end_value(&self) -> u64 {
        self.end_value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text to show `elapsed_ms` after the animation started, and whether
    /// the animation is finished.
    ///
    /// The final frame restores the original text verbatim.
    pub fn frame(&self, elapsed_ms: f64) -> (String, bool) {
        let progress = (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return (self.original.clone(), true);
        }
        let current = (self.end_value as f64 * ease_out_cubic(progress)).floor() as u64;
        (format!("{}{}", current, self.suffix), false)
    }
}

/// `1 - (1 - p)^3`
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}
