//! Scene composition for the gallery walkthrough.
//!
//! # Invariants
//! - The scene reads the camera pose; it never writes it.
//! - At most one panel per fixed placement; extra artworks are not hung.
//! - Renderers only read the scene. Swap the debug text renderer for a GPU
//!   backend without changing the session.

mod renderer;
mod room;
mod scene;
mod session;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use room::{PointLight, RoomLayout, Surface, FRAME_SIZE, PANEL_SIZE};
pub use scene::{ArtworkPanel, GalleryScene, EMISSIVE_HOVERED, EMISSIVE_IDLE};
pub use session::{ArtworkDetail, ViewerSession, CONTROLS_HINT, HINT_SECONDS};

pub fn crate_info() -> &'static str {
    "vernissage-scene v0.1.0"
}
