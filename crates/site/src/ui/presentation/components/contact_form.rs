//! Contact form with live validation

use dioxus::prelude::*;
use iwe_domain::FormModel;

use super::{FormBanner, FormField};
use crate::application::{FormController, FormVariant};
use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::SignalStore;
use crate::ui::use_platform;

#[component]
pub fn ContactForm() -> Element {
    let services = use_services();
    let platform = use_platform();
    let form: Signal<FormModel> = use_signal(|| FormVariant::Contact.model());

    let controller = use_hook(move || {
        FormController::new(
            FormVariant::Contact,
            services.config.contact_endpoint.clone(),
            services.config.messages.clone(),
            SignalStore::new(form),
            services.submitter.clone(),
            platform,
        )
    });

    let model = form.read().clone();
    let submit = model.submit().clone();
    let variant = controller.variant();

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
            class: "contact__form form",
            novalidate: true,
            onsubmit: on_submit,

            for field in model.fields().iter().cloned() {
                FormField {
                    key: "{field.name}",
                    dom_id: variant.field_dom_id(&field.name),
                    error: model.error_for(&field.name).map(str::to_string),
                    oninput: {
                        let controller = controller.clone();
                        let name = field.name.clone();
                        move |value: String| controller.handle_input(&name, value)
                    },
                    onblur: {
                        let controller = controller.clone();
                        let name = field.name.clone();
                        move |_| controller.handle_blur(&name)
                    },
                    field: field.clone(),
                }
            }

            button {
                r#type: "submit",
                class: "btn btn--primary form__submit",
                disabled: submit.disabled,
                style: "{submit.style()}",
                "{submit.label}"
            }

            FormBanner { banner: model.banner().cloned() }
        }
    }
}
