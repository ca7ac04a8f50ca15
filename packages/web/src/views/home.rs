use dioxus::prelude::*;
use ui::Portfolio;

#[component]
pub fn Home() -> Element {
    rsx! {
        Portfolio {}
    }
}
