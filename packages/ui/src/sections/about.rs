use dioxus::prelude::*;

use super::NoData;

#[component]
pub fn AboutView(label: String, text: String) -> Element {
    rsx! {
        h2 { class: "section-title", "{label}" }
        if text.trim().is_empty() {
            NoData {}
        } else {
            p { class: "about-text", "{text}" }
        }
    }
}
