use dioxus::prelude::*;
use ui::views::ProjectDetailView;

#[component]
pub fn ProjectDetail(slug: String) -> Element {
    rsx! {
        ProjectDetailView { slug: slug }
    }
}
