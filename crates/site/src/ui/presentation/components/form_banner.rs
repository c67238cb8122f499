//! Transient success/error message shown above a form's submit button

use dioxus::prelude::*;
use iwe_domain::Banner;

#[component]
pub fn FormBanner(banner: Option<Banner>) -> Element {
    let Some(banner) = banner else {
        return rsx! {};
    };

    rsx! {
        div {
            key: "{banner.id.0}",
            class: "{banner.class_name()}",
            role: "status",
            style: "{banner.style()}",
            "{banner.text}"
        }
    }
}
