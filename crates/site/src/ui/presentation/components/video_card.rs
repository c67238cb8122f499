//! Muted looping video that plays only while on screen

use dioxus::prelude::*;
use iwe_domain::page::VideoVisibility;

use crate::application::services::observe_video;
use crate::ui::presentation::state::SignalStore;
use crate::ui::use_platform;

#[component]
pub fn VideoCard(id: String, src: String, poster: Option<String>, caption: String) -> Element {
    let platform = use_platform();
    let playback = use_signal(VideoVisibility::default);

    let element_id = id.clone();
    rsx! {
        figure {
            class: "video-card",
            video {
                id: "{id}",
                class: "video-card__media",
                src: "{src}",
                poster,
                muted: true,
                playsinline: true,
                r#loop: true,
                preload: "metadata",
                onmounted: move |_| {
                    observe_video(platform.clone(), &element_id, SignalStore::new(playback));
                },
            }
            figcaption { class: "video-card__caption", "{caption}" }
        }
    }
}
