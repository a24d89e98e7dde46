//! Viewer input: raw keyboard/pointer events recorded as movement and look intent.
//!
//! # Invariants
//! - Event handlers only record intent; nothing here touches a camera pose.
//! - Intent is level-triggered: held keys are re-read every frame.
//! - Conflicting input cancels out instead of failing.

pub mod action;
mod event;
mod intent;

pub use action::{Action, KeyBindings};
pub use event::{InputEvent, KeyCode, ParseKeyError};
pub use intent::InputIntent;

pub fn crate_info() -> &'static str {
    "vernissage-input v0.1.0"
}
