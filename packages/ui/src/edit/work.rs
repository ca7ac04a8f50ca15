use dioxus::prelude::*;
use store::forms::{FormState, WorkDraft, WorkField};
use store::{NotifyKind, WorkEditor, WorkExperience, WorkType};

use super::{FormActions, ListModal, RowActions, SectionEditHeader, TextField};
use crate::sections::NoData;
use crate::views::{ConfirmDialog, ModalOverlay};
use crate::{notify_applied, update_session, use_notifier, use_session, SortableItem, SortableList};

#[component]
pub fn WorkExpEdit(label: String, visible: bool, works: Vec<WorkExperience>) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut modal = use_signal(|| ListModal::<WorkExperience>::Closed);

    rsx! {
        SectionEditHeader {
            label: label,
            visible: visible,
            on_toggle: move |_| {
                update_session(session, |s| Ok(WorkEditor::new(s, &notifier)?.toggle_visibility()));
            },
            on_add: move |_| modal.set(ListModal::Add),
        }

        if works.is_empty() {
            NoData {}
        }
        SortableList {
            on_move: move |(active, over): (String, String)| {
                update_session(session, |s| Ok(WorkEditor::new(s, &notifier)?.move_item(&active, &over)));
            },
            for work in works {
                SortableItem {
                    key: "{work.id}",
                    id: work.id.clone(),
                    div {
                        class: "edit-row",
                        span { class: "work-years", "{work.start} - {work.end}" }
                        div {
                            class: "edit-row-main",
                            strong { "{work.title}" }
                            if let Some(work_type) = work.work_type {
                                span { class: "badge", "{work_type.as_str()}" }
                            }
                        }
                        RowActions {
                            on_edit: {
                                let work = work.clone();
                                move |_| modal.set(ListModal::Edit(work.clone()))
                            },
                            on_delete: {
                                let work = work.clone();
                                move |_| modal.set(ListModal::Delete(work.clone()))
                            },
                        }
                    }
                }
            }
        }

        {match modal() {
            ListModal::Closed => rsx! {},
            ListModal::Add => rsx! {
                WorkForm {
                    on_submit: move |item: WorkExperience| {
                        let outcome = update_session(session, |s| Ok(WorkEditor::new(s, &notifier)?.add(item)));
                        notify_applied(outcome, &notifier, "Experience added", NotifyKind::Success);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Edit(work) => rsx! {
                WorkForm {
                    initial: work,
                    on_submit: move |item: WorkExperience| {
                        let outcome = update_session(session, |s| {
                            WorkEditor::new(s, &notifier)?.save(item);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Experience updated", NotifyKind::Info);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Delete(work) => rsx! {
                ConfirmDialog {
                    title: "Delete experience",
                    message: format!("Delete \"{}\"? This cannot be undone.", work.title),
                    on_confirm: move |_| {
                        let outcome = update_session(session, |s| {
                            WorkEditor::new(s, &notifier)?.delete(&work.id);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Experience deleted", NotifyKind::Error);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
        }}
    }
}

#[component]
pub fn WorkForm(
    initial: Option<WorkExperience>,
    on_submit: EventHandler<WorkExperience>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| match initial.as_ref() {
        Some(work) => FormState::<WorkDraft>::for_edit(work),
        None => FormState::for_add(),
    });

    let state = form.read().clone();
    let (title, submit_label) = if state.is_edit() {
        ("Edit experience", "Save")
    } else {
        ("Add experience", "Add")
    };
    let selected_type = state.draft.work_type.map(|w| w.as_str()).unwrap_or("");

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
                    id: "work-title",
                    label: "Title",
                    placeholder: "Frontend Developer",
                    value: state.draft.title.clone(),
                    error: state.error(WorkField::Title),
                    oninput: move |v: String| form.write().edit(WorkField::Title, |d| d.title = v),
                }
                div {
                    class: "field-row",
                    TextField {
                        id: "work-start",
                        label: "Start",
                        placeholder: "2022",
                        value: state.draft.start.clone(),
                        error: state.error(WorkField::Start),
                        oninput: move |v: String| form.write().edit(WorkField::Start, |d| d.start = v),
                    }
                    TextField {
                        id: "work-end",
                        label: "End",
                        placeholder: "2023",
                        value: state.draft.end.clone(),
                        error: state.error(WorkField::End),
                        oninput: move |v: String| form.write().edit(WorkField::End, |d| d.end = v),
                    }
                }
                div {
                    class: "field",
                    label { r#for: "work-type", "Work type" }
                    select {
                        id: "work-type",
                        class: if state.error(WorkField::WorkType).is_some() { "input invalid" } else { "input" },
                        value: "{selected_type}",
                        onchange: move |evt: FormEvent| {
                            let work_type = WorkType::parse(&evt.value());
                            form.write().edit(WorkField::WorkType, |d| d.work_type = work_type);
                        },
                        option { value: "", selected: state.draft.work_type.is_none(), "Select..." }
                        for work_type in WorkType::ALL {
                            option {
                                key: "{work_type.as_str()}",
                                value: "{work_type.as_str()}",
                                selected: state.draft.work_type == Some(work_type),
                                "{work_type.as_str()}"
                            }
                        }
                    }
                    if let Some(error) = state.error(WorkField::WorkType) {
                        span { class: "field-error", "{error}" }
                    }
                }
                TextField {
                    id: "work-description",
                    label: "Description",
                    multiline: true,
                    value: state.draft.description.clone(),
                    oninput: move |v: String| form.write().draft.description = v,
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
