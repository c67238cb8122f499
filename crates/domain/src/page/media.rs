//! Images and videos: lazy loading, broken-image fallback, play on visibility

/// Observer settings for lazy images
pub const LAZY_IMAGE_THRESHOLD: f64 = 0.01;
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px";

/// Alt text given to broken images that had none
pub const FALLBACK_ALT: &str = "Изображение недоступно";
pub const FALLBACK_BACKGROUND: &str = "#e2e8f0";

/// Visible share of a video card above which it plays
pub const VIDEO_PLAY_RATIO: f64 = 0.5;

/// An `<img data-src>` waiting for its first intersection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    data_src: Option<String>,
    src: Option<String>,
}

impl LazyImage {
    pub fn new(data_src: impl Into<String>) -> Self {
        Self {
            data_src: Some(data_src.into()),
            src: None,
        }
    }

    /// Move `data-src` into `src`. Returns false when already loaded.
    pub fn load(&mut self) -> bool {
        match self.data_src.take() {
            Some(src) if !src.is_empty() => {
                self.src = Some(src);
                true
            }
            _ => false,
        }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn data_src(&self) -> Option<&str> {
        self.data_src.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.src.is_some()
    }

    pub fn class_name(&self) -> &'static str {
        if self.is_loaded() {
            "loaded"
        } else {
            ""
        }
    }
}

/// Placeholder treatment applied once to an image that failed to load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageFallback {
    applied: bool,
}

impl ImageFallback {
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Returns the alt text to use, or None if the fallback already ran
    pub fn apply(&mut self, current_alt: &str) -> Option<String> {
        if std::mem::replace(&mut self.applied, true) {
            return None;
        }
        if current_alt.is_empty() {
            Some(FALLBACK_ALT.to_string())
        } else {
            Some(current_alt.to_string())
        }
    }

    pub fn style(&self) -> String {
        if self.applied {
            format!("background-color: {FALLBACK_BACKGROUND};")
        } else {
            String::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Plays a video while enough of it is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoVisibility {
    last: Option<PlaybackCommand>,
}

impl VideoVisibility {
    /// Command to issue for a new intersection ratio; repeats are suppressed
    pub fn on_ratio(&mut self, ratio: f64) -> Option<PlaybackCommand> {
        let command = if ratio >= VIDEO_PLAY_RATIO {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        };
        if self.last == Some(command) {
            return None;
        }
        // A card that was never playing needs no pause
        if self.last.is_none() && command == PlaybackCommand::Pause {
            self.last = Some(command);
            return None;
        }
        self.last = Some(command);
        Some(command)
    }

    pub fn is_playing(&self) -> bool {
        self.last == Some(PlaybackCommand::Play)
    }
}
