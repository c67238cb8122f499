//! The single page of the site

use dioxus::prelude::*;
use iwe_domain::page::ClickTarget;

use crate::ui::presentation::components::{
    ContactForm, LazyImg, NewsletterForm, ParallaxLayer, Reveal, SiteHeader, StatCounter,
    VideoCard,
};
use crate::ui::presentation::state::{use_page_effects, PageState};

const SERVICES: &[(&str, &str)] = &[
    (
        "Консультации",
        "Индивидуальные сессии по стратегии и развитию проекта.",
    ),
    (
        "Воркшопы",
        "Практические занятия для команд с разбором реальных задач.",
    ),
    (
        "Сопровождение",
        "Долгосрочная работа над продуктом от идеи до запуска.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("120+", "клиентов"),
    ("15", "лет опыта"),
    ("98%", "довольных участников"),
    ("40+", "проектов"),
];

#[component]
pub fn HomeView() -> Element {
    let state = use_context_provider(PageState::new);
    let service = use_page_effects();
    let page_class = use_memo(move || state.effects.read().page_class());

    let install = service.clone();
    let outside = service;

    rsx! {
        div {
            class: "{page_class}",
            onmounted: move |_| install.install(),
            onclick: move |_| outside.on_click(ClickTarget::Outside),

            SiteHeader {}

            main {
                section {
                    id: "hero",
                    class: "hero",
                    ParallaxLayer { class: "hero__bg" }
                    div {
                        class: "hero__content container",
                        h1 { class: "hero__title", "Олег Суворов" }
                        p { class: "hero__subtitle", "Стратегия, обучение и сопровождение проектов" }
                        a { class: "btn btn--primary", href: "#contact", "Связаться" }
                    }
                }

                section {
                    id: "about",
                    class: "about",
                    div {
                        class: "container about__grid",
                        Reveal {
                            id: "reveal-about-photo",
                            index: 0,
                            LazyImg {
                                id: "about-photo",
                                data_src: "/images/oleg.jpg",
                                alt: "Олег Суворов",
                                class: "about__photo",
                            }
                        }
                        Reveal {
                            id: "reveal-about-text",
                            index: 1,
                            h2 { class: "section__title", "Обо мне" }
                            p {
                                class: "about__text",
                                "Помогаю командам и предпринимателям находить ясные решения и доводить их до результата."
                            }
                        }
                    }
                }

                section {
                    id: "services",
                    class: "services",
                    div {
                        class: "container",
                        h2 { class: "section__title", "Услуги" }
                        div {
                            class: "services__grid",
                            for (i, (title, text)) in SERVICES.iter().enumerate() {
                                Reveal {
                                    key: "{title}",
                                    id: format!("reveal-service-{i}"),
                                    index: i,
                                    article {
                                        class: "service-card",
                                        h3 { class: "service-card__title", "{title}" }
                                        p { class: "service-card__text", "{text}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    id: "stats",
                    class: "stats",
                    div {
                        class: "container stats__grid",
                        for (i, (value, label)) in STATS.iter().enumerate() {
                            StatCounter {
                                key: "{label}",
                                id: format!("stat-{i}"),
                                text: value.to_string(),
                                label: label.to_string(),
                            }
                        }
                    }
                }

                section {
                    id: "video",
                    class: "video",
                    div {
                        class: "container",
                        h2 { class: "section__title", "Видео" }
                        VideoCard {
                            id: "promo-video",
                            src: "/video/promo.mp4",
                            poster: "/images/promo-poster.jpg",
                            caption: "Как проходит работа",
                        }
                    }
                }

                section {
                    id: "contact",
                    class: "contact",
                    div {
                        class: "container",
                        h2 { class: "section__title", "Контакты" }
                        ContactForm {}
                    }
                }
            }

            footer {
                class: "footer",
                div {
                    class: "container footer__inner",
                    div {
                        class: "newsletter",
                        h3 { class: "newsletter__title", "Подпишитесь на рассылку" }
                        NewsletterForm {}
                    }
                    p { class: "footer__copy", "© Олег Суворов, IWE" }
                }
            }
        }
    }
}
