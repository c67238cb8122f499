//! Statistic that counts up when it scrolls into view

use dioxus::prelude::*;

use crate::application::services::{animate_counter, observe_counter};
use crate::infrastructure::spawn_task;
use crate::ui::use_platform;

#[component]
pub fn StatCounter(id: String, text: String, label: String) -> Element {
    let platform = use_platform();
    let mut shown = use_signal(|| text.clone());
    let mut visible = use_signal(|| false);

    let effect_platform = platform.clone();
    let original = text.clone();
    use_effect(move || {
        if !visible() {
            return;
        }
        let platform = effect_platform.clone();
        let original = original.clone();
        spawn_task(async move {
            animate_counter(platform, &original, move |frame| shown.set(frame)).await;
        });
    });

    let element_id = id.clone();
    rsx! {
        div {
            class: "stats__item",
            span {
                id: "{id}",
                class: "stats__number",
                onmounted: move |_| {
                    observe_counter(platform.as_ref(), &element_id, move || visible.set(true));
                },
                "{shown}"
            }
            span { class: "stats__label", "{label}" }
        }
    }
}
