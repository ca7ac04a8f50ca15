use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card wide" } else { "modal-card" },
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                {children}
            }
        }
    }
}
