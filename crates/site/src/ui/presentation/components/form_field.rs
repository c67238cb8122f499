//! One labelled input with its inline validation message

use dioxus::prelude::*;
use iwe_domain::{Field, FieldKind};

#[component]
pub fn FormField(
    field: Field,
    dom_id: String,
    error: Option<String>,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let class = if error.is_some() {
        "form__input form__input--error"
    } else {
        "form__input"
    };
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    rsx! {
        div {
            class: "form__group",
            label {
                class: "form__label",
                r#for: "{dom_id}",
                "{label}"
            }
            if field.kind == FieldKind::Textarea {
                textarea {
                    id: "{dom_id}",
                    name: "{field.name}",
                    class: "{class}",
                    rows: "5",
                    value: "{field.value}",
                    oninput: move |e| oninput.call(e.value()),
                    onblur: move |_| onblur.call(()),
                }
            } else {
                input {
                    id: "{dom_id}",
                    name: "{field.name}",
                    r#type: field.kind.input_type(),
                    class: "{class}",
                    value: "{field.value}",
                    oninput: move |e| oninput.call(e.value()),
                    onblur: move |_| onblur.call(()),
                }
            }
            if let Some(message) = error {
                span {
                    class: "form__error",
                    "{message}"
                }
            }
        }
    }
}
