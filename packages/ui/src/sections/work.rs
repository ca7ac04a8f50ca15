use dioxus::prelude::*;
use store::WorkExperience;

use super::NoData;

#[component]
pub fn WorkView(label: String, works: Vec<WorkExperience>) -> Element {
    rsx! {
        h2 { class: "section-title", "{label}" }
        if works.is_empty() {
            NoData {}
        }
        ul {
            class: "work-list",
            for work in works {
                li {
                    key: "{work.id}",
                    class: "work-item",
                    span { class: "work-years", "{work.start} - {work.end}" }
                    div {
                        class: "work-main",
                        div {
                            class: "work-heading",
                            strong { "{work.title}" }
                            if let Some(work_type) = work.work_type {
                                span { class: "badge", "{work_type.as_str()}" }
                            }
                        }
                        if !work.description.is_empty() {
                            p { "{work.description}" }
                        }
                    }
                }
            }
        }
    }
}
