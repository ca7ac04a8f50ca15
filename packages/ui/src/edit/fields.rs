//! Form widgets shared by every edit modal.

use dioxus::prelude::*;
use store::forms::FieldError;

/// Labelled single-line input or textarea with an inline error.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] multiline: bool,
    #[props(default = "text".to_string())] input_type: String,
    error: Option<FieldError>,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() { "input invalid" } else { "input" };
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", "{label}" }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "{class}",
                    rows: 4,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "{class}",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
            if let Some(error) = error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

/// Submit/cancel row at the bottom of a form.
#[component]
pub fn FormActions(submit_label: String, on_submit: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-actions",
            button {
                class: "btn outline",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
            button {
                class: "btn primary",
                r#type: "button",
                onclick: move |_| on_submit.call(()),
                "{submit_label}"
            }
        }
    }
}
