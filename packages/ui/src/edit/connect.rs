use dioxus::prelude::*;
use store::forms::{ConnectDraft, ConnectField, FormState};
use store::{Connect, ConnectEditor, IconKey, NotifyKind};

use super::{FormActions, IconSelect, ListModal, RowActions, SectionEditHeader, TextField};
use crate::sections::NoData;
use crate::views::{ConfirmDialog, ModalOverlay};
use crate::{notify_applied, update_session, use_notifier, use_session, BrandIcon, SortableItem, SortableList};

#[component]
pub fn ConnectEdit(label: String, visible: bool, connects: Vec<Connect>) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut modal = use_signal(|| ListModal::<Connect>::Closed);

    rsx! {
        SectionEditHeader {
            label: label,
            visible: visible,
            on_toggle: move |_| {
                update_session(session, |s| Ok(ConnectEditor::new(s, &notifier)?.toggle_visibility()));
            },
            on_add: move |_| modal.set(ListModal::Add),
        }

        if connects.is_empty() {
            NoData {}
        }
        SortableList {
            on_move: move |(active, over): (String, String)| {
                update_session(session, |s| Ok(ConnectEditor::new(s, &notifier)?.move_item(&active, &over)));
            },
            for connect in connects {
                SortableItem {
                    key: "{connect.id}",
                    id: connect.id.clone(),
                    div {
                        class: "edit-row",
                        BrandIcon { provider: connect.icon }
                        div {
                            class: "edit-row-main",
                            strong { "{connect.media_name}" }
                            span { class: "muted", "{connect.display_link()}" }
                        }
                        RowActions {
                            on_edit: {
                                let connect = connect.clone();
                                move |_| modal.set(ListModal::Edit(connect.clone()))
                            },
                            on_delete: {
                                let connect = connect.clone();
                                move |_| modal.set(ListModal::Delete(connect.clone()))
                            },
                        }
                    }
                }
            }
        }

        {match modal() {
            ListModal::Closed => rsx! {},
            ListModal::Add => rsx! {
                ConnectForm {
                    on_submit: move |item: Connect| {
                        let outcome = update_session(session, |s| Ok(ConnectEditor::new(s, &notifier)?.add(item)));
                        notify_applied(outcome, &notifier, "Link added", NotifyKind::Success);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Edit(connect) => rsx! {
                ConnectForm {
                    initial: connect,
                    on_submit: move |item: Connect| {
                        let outcome = update_session(session, |s| {
                            ConnectEditor::new(s, &notifier)?.save(item);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Link updated", NotifyKind::Info);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
            ListModal::Delete(connect) => rsx! {
                ConfirmDialog {
                    title: "Delete link",
                    message: format!("Delete \"{}\"? This cannot be undone.", connect.media_name),
                    on_confirm: move |_| {
                        let outcome = update_session(session, |s| {
                            ConnectEditor::new(s, &notifier)?.delete(&connect.id);
                            Ok(())
                        });
                        notify_applied(outcome, &notifier, "Link deleted", NotifyKind::Error);
                        modal.set(ListModal::Closed);
                    },
                    on_close: move |_| modal.set(ListModal::Closed),
                }
            },
        }}
    }
}

/// Add/edit form for a connect entry. Validation runs on submit.
#[component]
pub fn ConnectForm(initial: Option<Connect>, on_submit: EventHandler<Connect>, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(|| match initial.as_ref() {
        Some(connect) => FormState::<ConnectDraft>::for_edit(connect),
        None => FormState::for_add(),
    });

    let state = form.read().clone();
    let (title, submit_label) = if state.is_edit() {
        ("Edit link", "Save")
    } else {
        ("Add link", "Add")
    };
    let (link_label, link_placeholder) = if state.draft.is_email() {
        ("Email", "name@example.com")
    } else {
        ("Link", "github.com/username")
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
                div {
                    class: "field",
                    label { r#for: "connect-icon", "Icon" }
                    IconSelect {
                        id: "connect-icon",
                        value: state.draft.icon,
                        onchange: move |icon: Option<IconKey>| form.write().edit(ConnectField::MediaName, |d| d.select_icon(icon)),
                    }
                }
                TextField {
                    id: "connect-media",
                    label: "Media name",
                    value: state.draft.media_name.clone(),
                    error: state.error(ConnectField::MediaName),
                    oninput: move |v: String| form.write().edit(ConnectField::MediaName, |d| d.media_name = v),
                }
                TextField {
                    id: "connect-nick",
                    label: "Nickname",
                    value: state.draft.nick_name.clone(),
                    oninput: move |v: String| form.write().draft.nick_name = v,
                }
                TextField {
                    id: "connect-link",
                    label: "{link_label}",
                    placeholder: "{link_placeholder}",
                    value: state.draft.link.clone(),
                    error: state.error(ConnectField::Link),
                    oninput: move |v: String| form.write().edit(ConnectField::Link, |d| d.link = v),
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
