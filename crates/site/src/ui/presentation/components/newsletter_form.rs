//! Footer newsletter subscription

use dioxus::prelude::*;
use iwe_domain::FormModel;

use super::FormBanner;
use crate::application::{FormController, FormVariant};
use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::SignalStore;
use crate::ui::use_platform;

#[component]
pub fn NewsletterForm() -> Element {
    let services = use_services();
    let platform = use_platform();
    let form: Signal<FormModel> = use_signal(|| FormVariant::Newsletter.model());

    let controller = use_hook(move || {
        FormController::new(
            FormVariant::Newsletter,
            services.config.newsletter_endpoint.clone(),
            services.config.messages.clone(),
            SignalStore::new(form),
            services.submitter.clone(),
            platform,
        )
    });

    let model = form.read().clone();
    let submit = model.submit().clone();
    let variant = controller.variant();
    let email = model.fields().first().cloned();

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn_task(async move {
                controller.submit_and_dismiss().await;
            });
        }
    };

    rsx! {
        form {
            id: variant.dom_id(),
            class: "newsletter__form",
            novalidate: true,
            onsubmit: on_submit,

            if let Some(field) = email {
                input {
                    id: variant.field_dom_id(&field.name),
                    name: "{field.name}",
                    r#type: field.kind.input_type(),
                    class: "newsletter__input",
                    placeholder: "{field.label}",
                    value: "{field.value}",
                    oninput: {
                        let controller = controller.clone();
                        let name = field.name.clone();
                        move |e: FormEvent| controller.handle_input(&name, e.value())
                    },
                }
            }

            button {
                r#type: "submit",
                class: "btn btn--primary newsletter__submit",
                disabled: submit.disabled,
                style: "{submit.style()}",
                "{submit.label}"
            }

            FormBanner { banner: model.banner().cloned() }
        }
    }
}
