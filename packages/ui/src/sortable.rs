//! Drag-to-reorder lists.
//!
//! [`SortableList`] owns the in-flight [`Drag`] and hands it to its
//! [`SortableItem`] children through context. A drag starts from an item's grip
//! once the [`ActivationPolicy`] built from the `[drag]` config lets it through,
//! follows the pointer across items and, on release, reports
//! `(active_id, over_id)` through `on_move`.

use dioxus::prelude::*;
use store::drag::{ActivationPolicy, Drag, DragGate, PointerKind};

use crate::clock::now_ms;
use crate::icons::FaGripVertical;
use crate::session::use_config;
use crate::Icon;

#[derive(Clone, Copy)]
struct DragState(Signal<Option<Drag>>);

#[component]
pub fn SortableList(
    on_move: EventHandler<(String, String)>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let config = use_config();
    let policy = ActivationPolicy::from(&config.drag);
    let DragState(mut drag) = use_context_provider(|| DragState(Signal::new(None)));

    let list_class = if drag.read().as_ref().is_some_and(|d| d.is_active()) {
        format!("sortable-list dragging {class}")
    } else {
        format!("sortable-list {class}")
    };

    rsx! {
        div {
            class: "{list_class}",
            onpointermove: move |evt: Event<PointerData>| {
                if drag.read().is_none() {
                    return;
                }
                let point = evt.client_coordinates();
                let mut cancelled = false;
                if let Some(d) = drag.write().as_mut() {
                    d.update(&policy, point.x, point.y, now_ms());
                    cancelled = d.is_cancelled();
                }
                if cancelled {
                    drag.set(None);
                }
            },
            onpointerup: move |_| {
                let finished = drag.write().take().and_then(Drag::finish);
                if let Some((active, over)) = finished {
                    tracing::debug!(%active, %over, "drag released");
                    on_move.call((active, over));
                }
            },
            onpointercancel: move |_| drag.set(None),
            onpointerleave: move |_| drag.set(None),
            {children}
        }
    }
}

#[component]
pub fn SortableItem(id: String, children: Element) -> Element {
    let DragState(mut drag) = use_context::<DragState>();

    let (is_active, is_over) = match drag.read().as_ref() {
        Some(d) if d.is_active() => (
            d.active_id == id,
            d.active_id != id && d.over_id.as_deref() == Some(id.as_str()),
        ),
        _ => (false, false),
    };
    let class = match (is_active, is_over) {
        (true, _) => "sortable-item active",
        (_, true) => "sortable-item over",
        _ => "sortable-item",
    };

    rsx! {
        div {
            class: "{class}",
            onpointerenter: {
                let id = id.clone();
                move |_| {
                    if drag.read().as_ref().is_some_and(|d| d.is_active()) {
                        if let Some(d) = drag.write().as_mut() {
                            d.hover(id.clone());
                        }
                    }
                }
            },
            button {
                class: "drag-handle",
                r#type: "button",
                title: "Drag to reorder",
                onpointerdown: {
                    let id = id.clone();
                    move |evt: Event<PointerData>| {
                        let point = evt.client_coordinates();
                        let kind = PointerKind::parse(&evt.pointer_type());
                        let gate = DragGate::press(kind, point.x, point.y, now_ms());
                        drag.set(Some(Drag::new(id.clone(), gate)));
                    }
                },
                Icon { width: 14, height: 14, icon: FaGripVertical }
            }
            div {
                class: "sortable-body",
                {children}
            }
        }
    }
}
