//! Block that fades in the first time it scrolls into view

use dioxus::prelude::*;
use iwe_domain::page::RevealState;

use crate::application::services::observe_reveal;
use crate::ui::presentation::state::SignalStore;
use crate::ui::use_platform;

#[component]
pub fn Reveal(id: String, index: usize, children: Element) -> Element {
    let platform = use_platform();
    let reveal = use_signal(|| RevealState::new(index));
    let style = reveal.read().style();

    let element_id = id.clone();
    rsx! {
        div {
            id: "{id}",
            class: "reveal",
            style: "{style}",
            onmounted: move |_| {
                observe_reveal(platform.as_ref(), &element_id, SignalStore::new(reveal));
            },
            {children}
        }
    }
}
