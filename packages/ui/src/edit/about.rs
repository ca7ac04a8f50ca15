use dioxus::prelude::*;
use store::AboutEditor;

use super::SectionEditHeader;
use crate::{update_session, use_notifier, use_session};

#[component]
pub fn AboutEdit(label: String, visible: bool, text: String) -> Element {
    let session = use_session();
    let notifier = use_notifier();

    rsx! {
        SectionEditHeader {
            label: label,
            visible: visible,
            on_toggle: move |_| {
                update_session(session, |s| Ok(AboutEditor::new(s, &notifier)?.toggle_visibility()));
            },
        }
        textarea {
            class: "input about-input",
            rows: 6,
            value: "{text}",
            oninput: move |evt: FormEvent| {
                let value = evt.value();
                update_session(session, |s| {
                    AboutEditor::new(s, &notifier)?.set_text(&value);
                    Ok(())
                });
            },
        }
    }
}
