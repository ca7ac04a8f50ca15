//! The portfolio page: header, edit banner and one block per section.
//!
//! Display mode renders the committed user and skips hidden sections. Edit mode
//! renders the working copy, including hidden sections (dimmed), through the
//! editors in [`crate::edit`].

use dioxus::prelude::*;
use store::{Notifier, NotifyKind, Section, SectionData};

use crate::edit::{AboutEdit, ConnectEdit, ProjectsEdit, WorkExpEdit};
use crate::icons::{FaFloppyDisk, FaPen, FaXmark};
use crate::sections::{AboutView, ConnectView, ProjectsView, WorkView};
use crate::views::ConfirmDialog;
use crate::{use_notifier, use_session, Header, Icon, PORTFOLIO_CSS};

#[component]
pub fn Portfolio() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();

    let editing = session.read().is_editing();
    let user = if editing {
        session.read().temp_user().clone()
    } else {
        session.read().user().clone()
    };
    let sections: Vec<Section> = user
        .sections
        .iter()
        .filter(|s| editing || s.visible)
        .cloned()
        .collect();

    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }

        div {
            class: "portfolio",
            Header { user: user.clone(), editing: editing }

            if editing {
                EditBanner {}
            } else {
                div {
                    class: "edit-hint",
                    span { "This portfolio is editable. Changes stay in this tab until you reload." }
                    button {
                        class: "btn primary small",
                        r#type: "button",
                        onclick: move |_| {
                            session.write().begin_edit();
                            notifier.notify("Edit mode on", NotifyKind::Info);
                        },
                        Icon { width: 12, height: 12, icon: FaPen }
                        span { "Edit" }
                    }
                }
            }

            for section in sections {
                SectionBlock { key: "{section.id()}", section: section, editing: editing }
            }
        }
    }
}

#[component]
fn SectionBlock(section: Section, editing: bool) -> Element {
    let id = section.id();
    let class = if section.visible { "section" } else { "section hidden" };
    let label = section.label.clone();
    let visible = section.visible;

    let body = match (section.data, editing) {
        (SectionData::About(text), false) => rsx! { AboutView { label: label, text: text } },
        (SectionData::About(text), true) => rsx! { AboutEdit { label: label, visible: visible, text: text } },
        (SectionData::Projects(projects), false) => rsx! { ProjectsView { label: label, projects: projects } },
        (SectionData::Projects(projects), true) => {
            rsx! { ProjectsEdit { label: label, visible: visible, projects: projects } }
        }
        (SectionData::WorkExp(works), false) => rsx! { WorkView { label: label, works: works } },
        (SectionData::WorkExp(works), true) => rsx! { WorkExpEdit { label: label, visible: visible, works: works } },
        (SectionData::Connect(connects), false) => rsx! { ConnectView { label: label, connects: connects } },
        (SectionData::Connect(connects), true) => {
            rsx! { ConnectEdit { label: label, visible: visible, connects: connects } }
        }
    };

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            {body}
        }
    }
}

/// Sticky bar shown in edit mode. Save commits the working copy; cancel
/// discards it, asking first when there is something to lose.
#[component]
fn EditBanner() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let mut confirm_exit = use_signal(|| false);
    let has_changes = session.read().has_changes();

    let mut discard = move || {
        session.write().cancel_edit();
        notifier.notify("Changes discarded", NotifyKind::Error);
    };

    rsx! {
        div {
            class: "edit-banner",
            span { "Edit mode" }
            div {
                class: "edit-banner-actions",
                button {
                    class: "btn danger small",
                    r#type: "button",
                    onclick: move |_| {
                        if has_changes {
                            confirm_exit.set(true);
                        } else {
                            discard();
                        }
                    },
                    Icon { width: 12, height: 12, icon: FaXmark }
                    span { "Cancel" }
                }
                button {
                    class: "btn success small",
                    r#type: "button",
                    disabled: !has_changes,
                    onclick: move |_| {
                        session.write().commit_edit();
                        notifier.notify("Changes saved", NotifyKind::Success);
                    },
                    Icon { width: 12, height: 12, icon: FaFloppyDisk }
                    span { "Save" }
                }
            }
        }

        if confirm_exit() {
            ConfirmDialog {
                title: "Leave edit mode?",
                message: "You have unsaved changes. Leaving now discards them.",
                confirm_label: "Discard",
                cancel_label: "Keep editing",
                on_confirm: move |_| {
                    confirm_exit.set(false);
                    discard();
                },
                on_close: move |_| confirm_exit.set(false),
            }
        }
    }
}
