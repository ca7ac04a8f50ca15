use dioxus::prelude::*;
use store::{Notifier, NotifyKind, User};

use crate::edit::ProfileForm;
use crate::icons::FaPen;
use crate::{use_notifier, use_session, Icon};

/// Avatar, name and subtitle. In edit mode the avatar opens the profile form.
#[component]
pub fn Header(user: User, editing: bool) -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let mut show_form = use_signal(|| false);

    let initial = user.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    rsx! {
        header {
            class: "profile-header",
            div {
                class: "avatar-wrap",
                if user.avatar.trim().is_empty() {
                    div { class: "avatar initial", "{initial}" }
                } else {
                    img { class: "avatar", src: "{user.avatar}", alt: "{user.name}" }
                }
                if editing {
                    button {
                        class: "icon-button avatar-edit",
                        r#type: "button",
                        title: "Edit profile",
                        onclick: move |_| show_form.set(true),
                        Icon { width: 12, height: 12, icon: FaPen }
                    }
                }
            }
            div {
                class: "profile-text",
                h1 { "{user.name}" }
                if !user.sub_title.is_empty() {
                    p { class: "profile-subtitle", "{user.sub_title}" }
                }
            }
        }

        if show_form() {
            ProfileForm {
                user: user.clone(),
                on_submit: move |profile: User| {
                    session.write().update_profile(&profile.name, &profile.sub_title, &profile.avatar);
                    notifier.notify("Profile updated", NotifyKind::Success);
                    show_form.set(false);
                },
                on_close: move |_| show_form.set(false),
            }
        }
    }
}
