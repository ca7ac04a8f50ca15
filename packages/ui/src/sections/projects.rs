use dioxus::prelude::*;
use store::Projects;

use super::{GalleryModal, NoData};
use crate::icons::FaArrowUpRightFromSquare;
use crate::Icon;

#[component]
pub fn ProjectsView(label: String, projects: Projects) -> Element {
    let mut gallery_at = use_signal(|| None::<usize>);
    let mode = projects.mode;

    rsx! {
        h2 { class: "section-title", "{label}" }

        if mode.shows_links() {
            if projects.links.is_empty() {
                NoData {}
            }
            ul {
                class: "project-links",
                for link in projects.links.iter() {
                    li {
                        key: "{link.id}",
                        class: "project-link",
                        if let Some(icon) = link.icon.as_ref() {
                            img { class: "project-icon", src: "{icon}", alt: "" }
                        }
                        div {
                            class: "project-link-main",
                            Link {
                                to: format!("/projects/{}", link.slug),
                                strong { "{link.title}" }
                            }
                            if !link.subtitle.is_empty() {
                                span { class: "project-subtitle", "{link.subtitle}" }
                            }
                        }
                        span { class: "project-year", "{link.year}" }
                        a {
                            class: "icon-button",
                            href: "{link.link}",
                            target: "_blank",
                            rel: "noreferrer",
                            title: "Open",
                            Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                        }
                    }
                }
            }
        }

        if mode.shows_artwork() {
            if projects.artwork.is_empty() {
                NoData {}
            }
            div {
                class: "artwork-grid",
                for (i, art) in projects.artwork.iter().enumerate() {
                    button {
                        key: "{art.id}",
                        class: "artwork-tile",
                        r#type: "button",
                        onclick: move |_| gallery_at.set(Some(i)),
                        img { src: "{art.image}", alt: "{art.title}" }
                        span { "{art.title}" }
                    }
                }
            }
        }

        if let Some(start) = gallery_at() {
            GalleryModal {
                artwork: projects.artwork.clone(),
                start: start,
                on_close: move |_| gallery_at.set(None),
            }
        }
    }
}
