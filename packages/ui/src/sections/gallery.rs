use dioxus::prelude::*;
use store::ProjectArtwork;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::views::ModalOverlay;
use crate::Icon;

/// Full-size artwork viewer with previous/next navigation that wraps around.
#[component]
pub fn GalleryModal(artwork: Vec<ProjectArtwork>, start: usize, on_close: EventHandler<()>) -> Element {
    let count = artwork.len();
    let mut index = use_signal(move || start.min(count.saturating_sub(1)));

    let Some(current) = artwork.get(index()).cloned() else {
        return rsx! {};
    };
    let position = format!("{} / {count}", index() + 1);

    rsx! {
        ModalOverlay {
            title: current.title.clone(),
            wide: true,
            on_close: on_close,
            div {
                class: "gallery",
                button {
                    class: "icon-button",
                    r#type: "button",
                    disabled: count < 2,
                    onclick: move |_| index.set((index() + count - 1) % count),
                    Icon { width: 18, height: 18, icon: FaChevronLeft }
                }
                figure {
                    img { src: "{current.image}", alt: "{current.title}" }
                    figcaption {
                        p { "{current.description}" }
                        span { class: "gallery-year", "{current.year}" }
                        span { class: "gallery-position", "{position}" }
                    }
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    disabled: count < 2,
                    onclick: move |_| index.set((index() + 1) % count),
                    Icon { width: 18, height: 18, icon: FaChevronRight }
                }
            }
        }
    }
}
