use dioxus::prelude::*;
use store::forms::{ArtworkDraft, ArtworkField, FormState, ProjectLinkDraft, ProjectLinkField};
use store::{ProjectArtwork, ProjectLink, ToolCategory};

use super::{FormActions, TextField, ToolTagsInput};
use crate::views::ModalOverlay;

#[component]
pub fn ProjectLinkForm(
    initial: Option<ProjectLink>,
    on_submit: EventHandler<ProjectLink>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| match initial.as_ref() {
        Some(link) => FormState::<ProjectLinkDraft>::for_edit(link),
        None => FormState::for_add(),
    });

    let state = form.read().clone();
    let (title, submit_label) = if state.is_edit() {
        ("Edit project", "Save")
    } else {
        ("Add project", "Add")
    };

    let submit = move |_: ()| {
        let item = form.write().submit();
        if let Some(item) = item {
            on_submit.call(item);
            form.write().reset();
        }
    };

    rsx! {
        ModalOverlay {
            title: "{title}",
            wide: true,
            on_close: on_close,
            div {
                class: "form",
                TextField {
                    id: "link-title",
                    label: "Title",
                    value: state.draft.title.clone(),
                    error: state.error(ProjectLinkField::Title),
                    oninput: move |v: String| form.write().edit(ProjectLinkField::Title, |d| d.title = v),
                }
                TextField {
                    id: "link-subtitle",
                    label: "Subtitle",
                    value: state.draft.subtitle.clone(),
                    oninput: move |v: String| form.write().draft.subtitle = v,
                }
                TextField {
                    id: "link-description",
                    label: "Description",
                    multiline: true,
                    value: state.draft.description.clone(),
                    error: state.error(ProjectLinkField::Description),
                    oninput: move |v: String| form.write().edit(ProjectLinkField::Description, |d| d.description = v),
                }
                div {
                    class: "field-row",
                    TextField {
                        id: "link-year",
                        label: "Year",
                        placeholder: "2025",
                        value: state.draft.year.clone(),
                        error: state.error(ProjectLinkField::Year),
                        oninput: move |v: String| form.write().edit(ProjectLinkField::Year, |d| d.year = v),
                    }
                    TextField {
                        id: "link-url",
                        label: "Link",
                        placeholder: "my-project.dev",
                        value: state.draft.link.clone(),
                        error: state.error(ProjectLinkField::Link),
                        oninput: move |v: String| form.write().edit(ProjectLinkField::Link, |d| d.link = v),
                    }
                }
                div {
                    class: "field-row",
                    TextField {
                        id: "link-icon",
                        label: "Icon image",
                        placeholder: "/icon.png",
                        value: state.draft.icon.clone(),
                        oninput: move |v: String| form.write().draft.icon = v,
                    }
                    TextField {
                        id: "link-cover",
                        label: "Cover image",
                        placeholder: "/cover.png",
                        value: state.draft.cover.clone(),
                        oninput: move |v: String| form.write().draft.cover = v,
                    }
                }
                for category in ToolCategory::ALL {
                    ToolTagsInput {
                        key: "{category.label()}",
                        category: category,
                        tags: state.draft.tools.get(category).clone(),
                        on_add: move |tag: String| {
                            form.write().draft.tools.add_tag(category, &tag);
                        },
                        on_remove: move |tag: String| form.write().draft.tools.remove_tag(category, &tag),
                    }
                }
                FormActions {
                    submit_label: "{submit_label}",
                    on_submit: submit,
                    on_cancel: on_close,
                }
            }
        }
    }
}

#[component]
pub fn ArtworkForm(
    initial: Option<ProjectArtwork>,
    on_submit: EventHandler<ProjectArtwork>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| match initial.as_ref() {
        Some(art) => FormState::<ArtworkDraft>::for_edit(art),
        None => FormState::for_add(),
    });

    let state = form.read().clone();
    let (title, submit_label) = if state.is_edit() {
        ("Edit artwork", "Save")
    } else {
        ("Add artwork", "Add")
    };

    let submit = move |_: ()| {
        let item = form.write().submit();
        if let Some(item) = item {
            on_submit.call(item);
            form.write().reset();
        }
    };

    rsx! {
        ModalOverlay {
            title: "{title}",
            on_close: on_close,
            div {
                class: "form",
                TextField {
                    id: "art-image",
                    label: "Image",
                    placeholder: "/artwork/piece.jpg",
                    value: state.draft.image.clone(),
                    error: state.error(ArtworkField::Image),
                    oninput: move |v: String| form.write().edit(ArtworkField::Image, |d| d.image = v),
                }
                if !state.draft.image.trim().is_empty() {
                    img { class: "image-preview", src: "{state.draft.image}", alt: "Preview" }
                }
                TextField {
                    id: "art-title",
                    label: "Title",
                    value: state.draft.title.clone(),
                    error: state.error(ArtworkField::Title),
                    oninput: move |v: String| form.write().edit(ArtworkField::Title, |d| d.title = v),
                }
                TextField {
                    id: "art-description",
                    label: "Description",
                    multiline: true,
                    value: state.draft.description.clone(),
                    oninput: move |v: String| form.write().draft.description = v,
                }
                TextField {
                    id: "art-year",
                    label: "Year",
                    placeholder: "2024",
                    value: state.draft.year.clone(),
                    error: state.error(ArtworkField::Year),
                    oninput: move |v: String| form.write().edit(ArtworkField::Year, |d| d.year = v),
                }
                FormActions {
                    submit_label: "{submit_label}",
                    on_submit: submit,
                    on_cancel: on_close,
                }
            }
        }
    }
}
