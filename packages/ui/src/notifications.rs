//! Toast notifications.
//!
//! [`ToastNotifier`] is the UI side of [`store::Notifier`]: every notification
//! is pushed onto the [`Toasts`] signal and removed again once the configured
//! duration has passed.

use std::time::Duration;

use dioxus::prelude::*;
use store::{Notifier, NotifyKind};

use crate::clock::sleep;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotifyKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: &str, kind: NotifyKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastNotifier {
    toasts: Signal<Toasts>,
    duration_ms: u64,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<Toasts>, duration_ms: u64) -> Self {
        Self { toasts, duration_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        tracing::info!(%kind, "{message}");
        let mut toasts = self.toasts;
        let id = toasts.write().push(message, kind);
        let duration = Duration::from_millis(self.duration_ms);
        spawn(async move {
            sleep(duration).await;
            toasts.write().dismiss(id);
        });
    }
}

#[component]
pub fn NotificationStack() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        NotifyKind::Success => "toast success",
                        NotifyKind::Error => "toast error",
                        NotifyKind::Info => "toast info",
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
