//! Image that loads when it approaches the viewport

use dioxus::prelude::*;
use iwe_domain::page::{ImageFallback, LazyImage};

use crate::application::services::observe_lazy_image;
use crate::ui::presentation::state::SignalStore;
use crate::ui::use_platform;

#[component]
pub fn LazyImg(id: String, data_src: String, alt: String, class: Option<String>) -> Element {
    let platform = use_platform();
    let image = use_signal(|| LazyImage::new(data_src.clone()));
    let mut fallback = use_signal(ImageFallback::default);
    let mut alt_text = use_signal(|| alt.clone());

    let current = image.read().clone();
    let base_class = class.unwrap_or_default();
    let class_name = format!("{} {}", base_class, current.class_name());
    let style = fallback.read().style();

    let element_id = id.clone();
    rsx! {
        img {
            id: "{id}",
            class: "{class_name.trim()}",
            src: current.src().map(str::to_string),
            "data-src": current.data_src().map(str::to_string),
            alt: "{alt_text}",
            style: "{style}",
            onmounted: move |_| {
                observe_lazy_image(platform.as_ref(), &element_id, SignalStore::new(image));
            },
            onerror: move |_| {
                let current_alt = alt_text.read().clone();
                if let Some(new_alt) = fallback.write().apply(&current_alt) {
                    alt_text.set(new_alt);
                }
            },
        }
    }
}
