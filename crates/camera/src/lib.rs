//! Walk camera: turns recorded input into a clamped first-person pose once per frame.
//!
//! # Invariants
//! - The pose only changes inside [`CameraController::on_frame`].
//! - Y is pinned to the eye height; X and Z stay inside the room bounds.
//! - Pitch stays within the configured limit; yaw is unbounded.

mod config;
mod controller;

pub use config::{CameraConfig, ConfigError};
pub use controller::CameraController;

pub fn crate_info() -> &'static str {
    "vernissage-camera v0.1.0"
}
