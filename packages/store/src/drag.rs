//! Drag activation for sortable lists.
//!
//! A press does not start a drag by itself. Mouse and pen presses become drags
//! once the pointer has travelled [`DragConfig::pointer_distance_px`]; touch
//! presses become drags once they have been held for
//! [`DragConfig::touch_delay_ms`] without drifting more than
//! [`DragConfig::touch_tolerance_px`]. Drifting further first cancels the
//! gesture so the page can scroll instead.
//!
//! Times are milliseconds from any monotonic source the caller picks.

use crate::config::DragConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Map a DOM `pointerType` value. Unknown values behave like a mouse.
    pub fn parse(pointer_type: &str) -> PointerKind {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }
}

/// Activation thresholds, usually built from [`DragConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationPolicy {
    pub pointer_distance: f64,
    pub touch_delay_ms: f64,
    pub touch_tolerance: f64,
}

impl From<&DragConfig> for ActivationPolicy {
    fn from(config: &DragConfig) -> Self {
        Self {
            pointer_distance: config.pointer_distance_px,
            touch_delay_ms: config.touch_delay_ms as f64,
            touch_tolerance: config.touch_tolerance_px,
        }
    }
}

impl Default for ActivationPolicy {
    fn default() -> Self {
        Self::from(&DragConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Pending,
    Active,
    Cancelled,
}

/// Tracks one press from pointer-down until it activates or is abandoned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGate {
    kind: PointerKind,
    origin: (f64, f64),
    pressed_at: f64,
    phase: DragPhase,
}

impl DragGate {
    pub fn press(kind: PointerKind, x: f64, y: f64, now_ms: f64) -> Self {
        Self {
            kind,
            origin: (x, y),
            pressed_at: now_ms,
            phase: DragPhase::Pending,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Feed the current pointer position. Active and cancelled gates stay put.
    pub fn update(&mut self, policy: &ActivationPolicy, x: f64, y: f64, now_ms: f64) -> DragPhase {
        if self.phase != DragPhase::Pending {
            return self.phase;
        }
        let moved = (x - self.origin.0).hypot(y - self.origin.1);
        self.phase = match self.kind {
            PointerKind::Mouse | PointerKind::Pen => {
                if moved >= policy.pointer_distance {
                    DragPhase::Active
                } else {
                    DragPhase::Pending
                }
            }
            PointerKind::Touch => {
                if moved > policy.touch_tolerance {
                    DragPhase::Cancelled
                } else if now_ms - self.pressed_at >= policy.touch_delay_ms {
                    DragPhase::Active
                } else {
                    DragPhase::Pending
                }
            }
        };
        if self.phase != DragPhase::Pending {
            tracing::debug!(kind = ?self.kind, phase = ?self.phase, "drag gate settled");
        }
        self.phase
    }
}

/// An in-flight drag over a sortable list.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag {
    pub active_id: String,
    pub over_id: Option<String>,
    gate: DragGate,
}

impl Drag {
    pub fn new(active_id: impl Into<String>, gate: DragGate) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: None,
            gate,
        }
    }

    pub fn is_active(&self) -> bool {
        self.gate.phase() == DragPhase::Active
    }

    pub fn is_cancelled(&self) -> bool {
        self.gate.phase() == DragPhase::Cancelled
    }

    pub fn update(&mut self, policy: &ActivationPolicy, x: f64, y: f64, now_ms: f64) -> DragPhase {
        self.gate.update(policy, x, y, now_ms)
    }

    /// Record the item currently under the pointer. Ignored until activation.
    pub fn hover(&mut self, over_id: impl Into<String>) {
        if self.is_active() {
            self.over_id = Some(over_id.into());
        }
    }

    /// End the gesture, returning `(active, over)` when it should reorder.
    pub fn finish(self) -> Option<(String, String)> {
        if !self.is_active() {
            return None;
        }
        let over = self.over_id?;
        (over != self.active_id).then_some((self.active_id, over))
    }
}
