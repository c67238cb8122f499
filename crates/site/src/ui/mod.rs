use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    let platform = use_platform();
    use_hook(move || platform.set_page_title("Олег Суворов | IWE"));

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/site.css"),
        }

        presentation::views::HomeView {}
    }
}
