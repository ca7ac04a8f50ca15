use dioxus::prelude::*;
use store::Connect;

use super::NoData;
use crate::BrandIcon;

#[component]
pub fn ConnectView(label: String, connects: Vec<Connect>) -> Element {
    rsx! {
        h2 { class: "section-title", "{label}" }
        if connects.is_empty() {
            NoData {}
        }
        ul {
            class: "connect-list",
            for connect in connects {
                li {
                    key: "{connect.id}",
                    class: "connect-item",
                    BrandIcon { provider: connect.icon }
                    span { class: "connect-media", "{connect.media_name}" }
                    a {
                        class: "connect-link",
                        href: "{connect.link}",
                        target: "_blank",
                        rel: "noreferrer",
                        if connect.nick_name.is_empty() {
                            "{connect.display_link()}"
                        } else {
                            "{connect.nick_name}"
                        }
                    }
                    span { class: "connect-display", "{connect.display_link()}" }
                }
            }
        }
    }
}
