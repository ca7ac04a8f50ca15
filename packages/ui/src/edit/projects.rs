use dioxus::prelude::*;
use store::{NotifyKind, ProjectArtwork, ProjectLink, Projects, ProjectsEditor, ProjectsMode};

use super::{ArtworkForm, ListModal, ProjectLinkForm, RowActions, SectionEditHeader};
use crate::sections::NoData;
use crate::views::ConfirmDialog;
use crate::{notify_applied, update_session, use_notifier, use_session, Icon, SortableItem, SortableList};
use crate::icons::FaPlus;

#[component]
pub fn ProjectsEdit(label: String, visible: bool, projects: Projects) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mode = projects.mode;

    rsx! {
        SectionEditHeader {
            label: label,
            visible: visible,
            on_toggle: move |_| {
                update_session(session, |s| Ok(ProjectsEditor::new(s, &notifier)?.toggle_visibility()));
            },
        }

        div {
            class: "field inline",
            label { r#for: "projects-mode", "Show" }
            select {
                id: "projects-mode",
                class: "input",
                value: "{mode.label()}",
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    let Some(mode) = ProjectsMode::ALL.into_iter().find(|m| m.label() == value) else {
                        return;
                    };
                    update_session(session, |s| {
                        ProjectsEditor::new(s, &notifier)?.set_type(mode);
                        Ok(())
                    });
                },
                for option_mode in ProjectsMode::ALL {
                    option {
                        key: "{option_mode.label()}",
                        value: "{option_mode.label()}",
                        selected: option_mode == mode,
                        "{option_mode.label()}"
                    }
                }
            }
        }

        if mode.shows_links() {
            LinksList { links: projects.links.clone() }
        }
        if mode.shows_artwork() {
            ArtworkGrid { artwork: projects.artwork.clone() }
        }
    }
}

#[component]
fn ListHeading(title: String, on_add: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "list-heading",
            h3 { "{title}" }
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

#[component]
fn LinksList(links: Vec<ProjectLink>) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut modal = use_signal(|| ListModal::<ProjectLink>::Closed);

    rsx! {
        ListHeading { title: "Links", on_add: move |_| modal.set(ListModal::Add) }
        if links.is_empty() {
            NoData {}
        }
        SortableList {
            on_move: move |(active, over): (String, String)| {
                update_session(session, |s| {
                    Ok(ProjectsEditor::new(s, &notifier)?.links()?.move_item(&active, &over))
                });
            },
            for link in links {
                SortableItem {
                    key: "{link.id}",
                    id: link.id.clone(),
                    div {
                        class: "edit-row",
                        if let Some(icon) = link.icon.as_ref() {
                            img { class: "project-icon", src: "{icon}", alt: "" }
                        }
                        div {
                            class: "edit-row-main",
                            strong { "{link.title}" }
                            span { class: "muted", "/projects/{link.slug}" }
                        }
                        span { class: "project-year", "{link.year}" }
                        RowActions {
                            on_edit: {
                                let link = link.clone();
                                move |_| modal.set(ListModal::Edit(link.clone()))
                            },
                            on_delete: {
                                let link = link.clone();
                                move |_| modal.set(ListModal::Delete(link.clone()))
                            },
                        }
                    }
                }
            }
        }

        {match modal() {
            ListModal::Closed => rsx! {},
            ListModal::Add => rsx! {
                ProjectLinkForm {
                    on_submit: move |item: ProjectLink| {
                        let outcome = update_session(session, |s| Ok(ProjectsEditor::new(s, &notifier)?.links()?.add(item)));
                        notify_applied(outcome, &notifier, "Project added", NotifyKind::Success);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Edit(link) => rsx! {
                ProjectLinkForm {
                    initial: link,
                    on_submit: move |item: ProjectLink| {
                        let outcome = update_session(session, |s| {
                            ProjectsEditor::new(s, &notifier)?.links()?.save(item);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Project updated", NotifyKind::Info);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Delete(link) => rsx! {
                ConfirmDialog {
                    title: "Delete project",
                    message: format!("Delete \"{}\"? This cannot be undone.", link.title),
                    on_confirm: move |_| {
                        let outcome = update_session(session, |s| {
                            ProjectsEditor::new(s, &notifier)?.links()?.delete(&link.id);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Project deleted", NotifyKind::Error);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
        }}
    }
}

#[component]
fn ArtworkGrid(artwork: Vec<ProjectArtwork>) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut modal = use_signal(|| ListModal::<ProjectArtwork>::Closed);

    rsx! {
        ListHeading { title: "Artwork", on_add: move |_| modal.set(ListModal::Add) }
        if artwork.is_empty() {
            NoData {}
        }
        SortableList {
            class: "artwork-grid",
            on_move: move |(active, over): (String, String)| {
                update_session(session, |s| {
                    Ok(ProjectsEditor::new(s, &notifier)?.artwork()?.move_item(&active, &over))
                });
            },
            for art in artwork {
                SortableItem {
                    key: "{art.id}",
                    id: art.id.clone(),
                    div {
                        class: "artwork-tile",
                        img { src: "{art.image}", alt: "{art.title}" }
                        span { "{art.title}" }
                        RowActions {
                            on_edit: {
                                let art = art.clone();
                                move |_| modal.set(ListModal::Edit(art.clone()))
                            },
                            on_delete: {
                                let art = art.clone();
                                move |_| modal.set(ListModal::Delete(art.clone()))
                            },
                        }
                    }
                }
            }
        }

        {match modal() {
            ListModal::Closed => rsx! {},
            ListModal::Add => rsx! {
                ArtworkForm {
                    on_submit: move |item: ProjectArtwork| {
                        let outcome = update_session(session, |s| Ok(ProjectsEditor::new(s, &notifier)?.artwork()?.add(item)));
                        notify_applied(outcome, &notifier, "Artwork added", NotifyKind::Success);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Edit(art) => rsx! {
                ArtworkForm {
                    initial: art,
                    on_submit: move |item: ProjectArtwork| {
                        let outcome = update_session(session, |s| {
                            ProjectsEditor::new(s, &notifier)?.artwork()?.save(item);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Artwork updated", NotifyKind::Success);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Delete(art) => rsx! {
                ConfirmDialog {
                    title: "Delete artwork",
                    message: format!("Delete \"{}\"? This cannot be undone.", art.title),
                    on_confirm: move |_| {
                        let outcome = update_session(session, |s| {
                            ProjectsEditor::new(s, &notifier)?.artwork()?.delete(&art.id);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Artwork deleted", NotifyKind::Error);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
        }}
    }
}
