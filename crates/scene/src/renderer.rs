use crate::{FRAME_SIZE, GalleryScene, PANEL_SIZE};
use glam::Vec3;
use vernissage_common::Pose;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_pose(&Pose::default(), 75.0)
    }
}

impl RenderView {
    pub fn from_pose(pose: &Pose, fov_degrees: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.position + pose.forward(),
            fov_degrees,
            yaw: pose.yaw,
            pitch: pose.pitch,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the composed scene and a view, then produces output.
/// It never mutates the scene or the camera.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the given view.
    fn render(&self, scene: &GalleryScene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable description of the room, the camera and the
/// hung artworks. Used by the CLI walkthrough and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &GalleryScene, view: &RenderView) -> String {
        let layout = scene.layout();
        let mut out = String::new();
        out.push_str(&format!(
            "=== {} by {} ({}) ===\n",
            scene.title(),
            scene.artist(),
            scene.gallery_id()
        ));
        out.push_str(&format!(
            "Room: {:.1} x {:.1} x {:.1}, lights: {}, works: {}/{}\n",
            layout.width,
            layout.depth,
            layout.height,
            layout.lights.len(),
            scene.panels().len(),
            scene.total_artworks()
        ));
        out.push_str(&format!(
            "Panels: {:.1} x {:.1} in {:.1} x {:.1} frames\n",
            PANEL_SIZE.x, PANEL_SIZE.y, FRAME_SIZE.x, FRAME_SIZE.y
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) yaw={:.3} pitch={:.3} fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.yaw,
            view.pitch,
            view.fov_degrees
        ));

        for (i, panel) in scene.panels().iter().enumerate() {
            let p = panel.placement.position;
            out.push_str(&format!(
                "  [{i}] {:<28} key={:<18} pos=({:.1}, {:.1}, {:.1}) glow={:.2} tex={}{}\n",
                panel.artwork.title,
                panel.texture.key(),
                p.x,
                p.y,
                p.z,
                panel.emissive(),
                panel.texture.digest(),
                if panel.is_hovered() { " *" } else { "" }
            ));
        }

        out
    }
}
