//! Portfolio session context and hooks for the UI.

use dioxus::prelude::*;
use store::{seed, EditSession, Notifier, NotifyKind, PortfolioConfig, StoreError};

use crate::notifications::{NotificationStack, ToastNotifier, Toasts};

/// Get the edit session shared by every view.
pub fn use_session() -> Signal<EditSession> {
    use_context::<Signal<EditSession>>()
}

pub fn use_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

pub fn use_notifier() -> ToastNotifier {
    use_context::<ToastNotifier>()
}

/// Run one editor action against the session.
/// Editors refuse to build when their section is missing; that is logged and
/// the action is dropped.
pub fn update_session<R>(
    mut session: Signal<EditSession>,
    f: impl FnOnce(&mut EditSession) -> Result<R, StoreError>,
) -> Option<R> {
    let mut guard = session.write();
    apply_edit(&mut guard, f)
}

pub(crate) fn apply_edit<R>(
    session: &mut EditSession,
    f: impl FnOnce(&mut EditSession) -> Result<R, StoreError>,
) -> Option<R> {
    match f(session) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("edit dropped: {e}");
            None
        }
    }
}

/// Raise `message` only for an edit that went through.
pub fn notify_applied<R>(
    outcome: Option<R>,
    notifier: &dyn Notifier,
    message: &str,
    kind: NotifyKind,
) -> Option<R> {
    if outcome.is_some() {
        notifier.notify(message, kind);
    }
    outcome
}

/// Provider component that owns the edit session and the toast stack.
/// Wrap your app with this component.
#[component]
pub fn PortfolioProvider(config: PortfolioConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(EditSession::new(seed::example_user())));
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let duration_ms = config.notifications.duration_ms;
    use_context_provider(|| ToastNotifier::new(toasts, duration_ms));
    use_context_provider(|| config.clone());

    rsx! {
        {children}
        NotificationStack {}
    }
}
