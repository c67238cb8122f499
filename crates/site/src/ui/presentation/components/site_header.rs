//! Fixed header with the burger menu and in-page navigation

use dioxus::prelude::*;

use crate::application::services::page_effects::{BURGER_ID, HEADER_ID};
use crate::ui::presentation::state::{use_page_effects, PageState};

/// Navigation entries: (href, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "Обо мне"),
    ("#services", "Услуги"),
    ("#stats", "Результаты"),
    ("#video", "Видео"),
    ("#contact", "Контакты"),
];

#[component]
pub fn SiteHeader() -> Element {
    let state = use_context::<PageState>();
    let service = use_page_effects();
    let page = state.effects.read();

    let header_class = page.header.header_class();
    let burger_class = page.menu.burger_class();
    let nav_class = page.menu.nav_class();
    let aria_expanded = page.menu.aria_expanded();
    let aria_hidden = page.menu.aria_hidden();
    let links: Vec<(&'static str, &'static str, &'static str)> = NAV_LINKS
        .iter()
        .map(|(href, label)| (*href, *label, page.header.link_class(href)))
        .collect();
    drop(page);

    let toggle = service.clone();

    rsx! {
        header {
            id: HEADER_ID,
            class: "{header_class}",
            div {
                class: "header__container container",
                a { class: "logo", href: "#hero", "IWE" }

                button {
                    id: BURGER_ID,
                    class: "{burger_class}",
                    r#type: "button",
                    aria_label: "Меню",
                    aria_expanded: "{aria_expanded}",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        toggle.toggle_menu();
                    },
                    span { class: "burger__line" }
                    span { class: "burger__line" }
                    span { class: "burger__line" }
                }

                nav {
                    class: "{nav_class}",
                    aria_hidden: "{aria_hidden}",
                    onclick: move |evt| evt.stop_propagation(),
                    ul {
                        class: "nav__list",
                        for (href, label, link_class) in links {
                            li {
                                key: "{href}",
                                class: "nav__item",
                                a {
                                    class: "{link_class}",
                                    href: "{href}",
                                    onclick: {
                                        let service = service.clone();
                                        move |evt: MouseEvent| {
                                            if service.navigate(href) {
                                                evt.prevent_default();
                                            }
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
