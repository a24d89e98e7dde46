use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical key identifiers, named after DOM `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ShiftLeft,
    Space,
    Escape,
}

impl KeyCode {
    pub const ALL: [KeyCode; 11] = [
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ShiftLeft,
        KeyCode::Space,
        KeyCode::Escape,
    ];

    pub fn code(self) -> &'static str {
        match self {
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyS => "KeyS",
            KeyCode::KeyD => "KeyD",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::Space => "Space",
            KeyCode::Escape => "Escape",
        }
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised key code: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}

/// A raw event delivered by the host window, in host order.
///
/// Pointer positions are in screen pixels. Any pointer button starts a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    PointerDown { position: Vec2 },
    PointerUp,
    PointerMove { position: Vec2 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dom_codes() {
        assert_eq!("KeyW".parse::<KeyCode>(), Ok(KeyCode::KeyW));
        assert_eq!("ArrowLeft".parse::<KeyCode>(), Ok(KeyCode::ArrowLeft));
    }

    #[test]
    fn parse_unknown_code_fails() {
        let err = "KeyQ".parse::<KeyCode>().unwrap_err();
        assert_eq!(err, ParseKeyError("KeyQ".into()));
    }

    #[test]
    fn code_names_are_unique() {
        for (i, a) in KeyCode::ALL.iter().enumerate() {
            for b in &KeyCode::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
