use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: title,
            on_close: on_close,
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn outline",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "{cancel_label}"
                }
                button {
                    class: "btn danger",
                    r#type: "button",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
