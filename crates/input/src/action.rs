use crate::KeyCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A movement intent a held key can produce.
///
/// The camera controller consumes actions, never raw key codes, so rebinding
/// keys never touches movement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Walk toward the view direction (local -Z).
    MoveForward,
    /// Walk away from the view direction (local +Z).
    MoveBackward,
    /// Step left (local -X).
    StrafeLeft,
    /// Step right (local +X).
    StrafeRight,
    /// Bound to nothing (used for keys that are recorded but ignored).
    Noop,
}

/// Key to action table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: BTreeMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    /// WASD plus arrow keys.
    fn default() -> Self {
        let bindings = [
            (KeyCode::KeyW, Action::MoveForward),
            (KeyCode::ArrowUp, Action::MoveForward),
            (KeyCode::KeyS, Action::MoveBackward),
            (KeyCode::ArrowDown, Action::MoveBackward),
            (KeyCode::KeyA, Action::StrafeLeft),
            (KeyCode::ArrowLeft, Action::StrafeLeft),
            (KeyCode::KeyD, Action::StrafeRight),
            (KeyCode::ArrowRight, Action::StrafeRight),
        ]
        .into_iter()
        .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// An empty table. Every key maps to [`Action::Noop`].
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    pub fn action(&self, key: KeyCode) -> Action {
        self.bindings.get(&key).copied().unwrap_or(Action::Noop)
    }

    /// Keys bound to `action`, in key order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_wasd_and_arrows() {
        let b = KeyBindings::default();
        assert_eq!(b.action(KeyCode::KeyW), Action::MoveForward);
        assert_eq!(b.action(KeyCode::ArrowUp), Action::MoveForward);
        assert_eq!(b.action(KeyCode::KeyS), Action::MoveBackward);
        assert_eq!(b.action(KeyCode::ArrowLeft), Action::StrafeLeft);
        assert_eq!(b.action(KeyCode::KeyD), Action::StrafeRight);
    }

    #[test]
    fn unbound_key_is_noop() {
        let b = KeyBindings::default();
        assert_eq!(b.action(KeyCode::Space), Action::Noop);
        assert_eq!(KeyBindings::empty().action(KeyCode::KeyW), Action::Noop);
    }

    #[test]
    fn rebind_and_unbind() {
        let mut b = KeyBindings::default();
        b.bind(KeyCode::Space, Action::MoveForward);
        b.unbind(KeyCode::KeyW);
        assert_eq!(b.action(KeyCode::Space), Action::MoveForward);
        assert_eq!(b.action(KeyCode::KeyW), Action::Noop);
        let fwd: Vec<_> = b.keys_for(Action::MoveForward).collect();
        assert_eq!(fwd, vec![KeyCode::ArrowUp, KeyCode::Space]);
    }
}
