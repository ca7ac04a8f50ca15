//! Edit-mode renderings of each section and their modals.

use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash, FaPen, FaPlus, FaTrash};
use crate::Icon;

mod fields;
pub use fields::{FormActions, TextField};

mod icon_select;
pub use icon_select::IconSelect;

mod tool_tags;
pub use tool_tags::ToolTagsInput;

mod about;
pub use about::AboutEdit;

mod connect;
pub use connect::{ConnectEdit, ConnectForm};

mod work;
pub use work::{WorkExpEdit, WorkForm};

mod project_forms;
pub use project_forms::{ArtworkForm, ProjectLinkForm};

mod projects;
pub use projects::ProjectsEdit;

mod profile;
pub use profile::ProfileForm;

/// Which modal an editable list currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListModal<T> {
    Closed,
    Add,
    Edit(T),
    Delete(T),
}

/// Title row of a section in edit mode: label, visibility toggle and an
/// optional add button.
#[component]
pub fn SectionEditHeader(
    label: String,
    visible: bool,
    on_toggle: EventHandler<()>,
    on_add: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "section-edit-header",
            h2 { class: "section-title", "{label}" }
            div {
                class: "section-edit-actions",
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: if visible { "Hide section" } else { "Show section" },
                    onclick: move |_| on_toggle.call(()),
                    if visible {
                        Icon { width: 16, height: 16, icon: FaEye }
                    } else {
                        Icon { width: 16, height: 16, icon: FaEyeSlash }
                    }
                }
                if let Some(on_add) = on_add {
                    button {
                        class: "btn primary small",
                        r#type: "button",
                        onclick: move |_| on_add.call(()),
                        Icon { width: 12, height: 12, icon: FaPlus }
                        span { "Add" }
                    }
                }
            }
        }
    }
}

/// Edit and delete buttons of a list row.
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "row-actions",
            button {
                class: "icon-button",
                r#type: "button",
                title: "Edit",
                onclick: move |_| on_edit.call(()),
                Icon { width: 14, height: 14, icon: FaPen }
            }
            button {
                class: "icon-button danger",
                r#type: "button",
                title: "Delete",
                onclick: move |_| on_delete.call(()),
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    }
}
