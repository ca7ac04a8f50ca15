use dioxus::prelude::*;
use store::ToolCategory;

use crate::icons::FaXmark;
use crate::Icon;

/// Tag editor for one tool category. Enter or the add button commits the
/// typed tag; blank and duplicate tags are dropped by the caller's list.
#[component]
pub fn ToolTagsInput(
    category: ToolCategory,
    tags: Vec<String>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);
    let input_id = format!("tools-{}", category.label().to_lowercase());

    let mut commit = move || {
        let tag = draft().trim().to_string();
        if !tag.is_empty() {
            on_add.call(tag);
        }
        draft.set(String::new());
    };

    rsx! {
        div {
            class: "field",
            label { r#for: "{input_id}", "{category.label()}" }
            div {
                class: "tag-list",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag removable",
                        "{tag}"
                        button {
                            r#type: "button",
                            title: "Remove",
                            onclick: {
                                let tag = tag.clone();
                                move |_| on_remove.call(tag.clone())
                            },
                            Icon { width: 10, height: 10, icon: FaXmark }
                        }
                    }
                }
            }
            div {
                class: "tag-input",
                input {
                    id: "{input_id}",
                    class: "input",
                    r#type: "text",
                    placeholder: "Add a tool and press Enter",
                    value: "{draft}",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            commit();
                        }
                    },
                }
                button {
                    class: "btn outline small",
                    r#type: "button",
                    onclick: move |_| commit(),
                    "Add"
                }
            }
        }
    }
}
