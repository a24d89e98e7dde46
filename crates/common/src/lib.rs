//! Shared value types: camera pose, room footprint, wall placements, session ids.

mod types;

pub use types::{Placement, Pose, RoomBounds, SessionId};

pub fn crate_info() -> &'static str {
    "vernissage-common v0.1.0"
}
