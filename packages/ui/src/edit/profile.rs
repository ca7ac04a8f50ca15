use dioxus::prelude::*;
use store::forms::{FormState, ProfileDraft, ProfileField};
use store::User;

use super::{FormActions, TextField};
use crate::views::ModalOverlay;

/// Header fields of the portfolio owner. Submits a `User` carrying only the
/// name, subtitle and avatar.
#[component]
pub fn ProfileForm(user: User, on_submit: EventHandler<User>, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(|| FormState::<ProfileDraft>::for_edit(&user));
    let state = form.read().clone();

    let submit = move |_: ()| {
        let profile = form.write().submit();
        if let Some(profile) = profile {
            on_submit.call(profile);
        }
    };

    rsx! {
        ModalOverlay {
            title: "Edit profile",
            on_close: on_close,
            div {
                class: "form",
                if !state.draft.avatar.trim().is_empty() {
                    img { class: "avatar large", src: "{state.draft.avatar}", alt: "Avatar preview" }
                }
                TextField {
                    id: "profile-avatar",
                    label: "Avatar image",
                    placeholder: "/avatar.png",
                    value: state.draft.avatar.clone(),
                    oninput: move |v: String| form.write().draft.avatar = v,
                }
                TextField {
                    id: "profile-name",
                    label: "Name",
                    value: state.draft.name.clone(),
                    error: state.error(ProfileField::Name),
                    oninput: move |v: String| form.write().edit(ProfileField::Name, |d| d.name = v),
                }
                TextField {
                    id: "profile-subtitle",
                    label: "Subtitle",
                    value: state.draft.sub_title.clone(),
                    oninput: move |v: String| form.write().draft.sub_title = v,
                }
                FormActions {
                    submit_label: "Save",
                    on_submit: submit,
                    on_cancel: on_close,
                }
            }
        }
    }
}
