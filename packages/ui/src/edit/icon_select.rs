use dioxus::prelude::*;
use store::IconKey;

use crate::BrandIcon;

const OTHER: &str = "other";

/// Provider picker for connect entries. The empty choice is "Other".
#[component]
pub fn IconSelect(id: String, value: Option<IconKey>, onchange: EventHandler<Option<IconKey>>) -> Element {
    let selected = value.map(|k| k.as_str()).unwrap_or(OTHER);
    rsx! {
        div {
            class: "icon-select",
            BrandIcon { provider: value }
            select {
                id: "{id}",
                class: "input",
                value: "{selected}",
                onchange: move |evt: FormEvent| onchange.call(IconKey::parse(&evt.value())),
                for key in IconKey::ALL {
                    option {
                        key: "{key}",
                        value: "{key.as_str()}",
                        selected: Some(key) == value,
                        "{key.display_name()}"
                    }
                }
                option { value: OTHER, selected: value.is_none(), "Other" }
            }
        }
    }
}
