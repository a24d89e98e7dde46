use crate::{Action, InputEvent, KeyBindings, KeyCode};
use glam::{Vec2, Vec3};
use std::collections::HashSet;

/// Input recorded between frames.
///
/// Holds the set of keys currently down, whether the pointer is dragging,
/// the last pointer position, and the look delta accumulated since the last
/// frame consumed it. Owned by exactly one controller.
#[derive(Debug, Clone, Default)]
pub struct InputIntent {
    held: HashSet<KeyCode>,
    dragging: bool,
    last_pointer: Vec2,
    pending_look: Vec2,
}

impl InputIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw event. Never fails; repeated downs/ups are idempotent.
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
            InputEvent::PointerDown { position } => {
                self.dragging = true;
                self.last_pointer = position;
            }
            InputEvent::PointerUp => {
                self.dragging = false;
            }
            InputEvent::PointerMove { position } => {
                if !self.dragging {
                    return;
                }
                self.pending_look += position - self.last_pointer;
                self.last_pointer = position;
            }
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the given action is requested by any held key.
    pub fn is_active(&self, bindings: &KeyBindings, action: Action) -> bool {
        self.held.iter().any(|k| bindings.action(*k) == action)
    }

    /// Un-normalised movement direction in camera-local space.
    ///
    /// Forward is -Z and strafe right is +X. Each component is -1, 0 or 1;
    /// opposing actions cancel.
    pub fn movement_axes(&self, bindings: &KeyBindings) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.is_active(bindings, Action::MoveForward) {
            dir.z -= 1.0;
        }
        if self.is_active(bindings, Action::MoveBackward) {
            dir.z += 1.0;
        }
        if self.is_active(bindings, Action::StrafeLeft) {
            dir.x -= 1.0;
        }
        if self.is_active(bindings, Action::StrafeRight) {
            dir.x += 1.0;
        }
        dir
    }

    /// Drain the pointer delta accumulated since the previous call.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending_look)
    }

    pub fn pending_look(&self) -> Vec2 {
        self.pending_look
    }

    /// No keys held and no drag in progress.
    pub fn is_idle(&self) -> bool {
        self.held.is_empty() && !self.dragging
    }

    /// Forget all held keys and any drag, as when the window loses focus.
    pub fn clear(&mut self) {
        tracing::trace!(held = self.held.len(), "clearing input intent");
        self.held.clear();
        self.dragging = false;
        self.pending_look = Vec2::ZERO;
    }
}
