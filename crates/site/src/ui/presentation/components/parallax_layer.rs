use dioxus::prelude::*;

use crate::ui::presentation::state::PageState;

/// Background layer shifted against the scroll direction
#[component]
pub fn ParallaxLayer(class: String) -> Element {
    let state = use_context::<PageState>();
    let style = state.effects.read().parallax.style();

    rsx! {
        div {
            class: "{class} parallax",
            style: "{style}",
        }
    }
}
