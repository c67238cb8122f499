//! Transient notice shown under a form

use serde::{Deserialize, Serialize};

/// How long a banner stays fully visible before fading (ms)
pub const BANNER_VISIBLE_MS: u64 = 5_000;

/// Length of the fade-out before removal (ms)
pub const BANNER_FADE_MS: u64 = 300;

/// Identifies one banner instance within a form.
///
/// Ids grow monotonically so a dismissal timer started for an older banner
/// never removes its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BannerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// CSS modifier used by the site's stylesheet (`form-message--{modifier}`)
    pub fn modifier(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub text: String,
    /// Set once the fade-out has started
    pub fading: bool,
}

impl Banner {
    pub fn class_name(&self) -> String {
        format!("form-message form-message--{}", self.kind.modifier())
    }

    /// Inline style: the fade-out transition is applied only while fading
    pub fn style(&self) -> &'static str {
        if self.fading {
            "opacity: 0; transition: opacity 0.3s ease;"
        } else {
            "opacity: 1;"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_uses_kind_modifier() {
        let banner = Banner {
            id: BannerId(1),
            kind: BannerKind::Error,
            text: "oops".to_string(),
            fading: false,
        };
        assert_eq!(banner.class_name(), "form-message form-message--error");
        assert_eq!(banner.style(), "opacity: 1;");
    }
}
