//! Display-mode renderings of each section.

mod about;
pub use about::AboutView;

mod projects;
pub use projects::ProjectsView;

mod gallery;
pub use gallery::GalleryModal;

mod work;
pub use work::WorkView;

mod connect;
pub use connect::ConnectView;

use dioxus::prelude::*;

/// Placeholder for an empty list.
#[component]
pub fn NoData() -> Element {
    rsx! {
        p { class: "no-data", "No data" }
    }
}
