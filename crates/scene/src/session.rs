use crate::{GalleryScene, RenderView, Renderer, RoomLayout};
use glam::{Vec2, Vec3};
use vernissage_camera::{CameraConfig, CameraController};
use vernissage_catalog::{Artwork, Gallery};
use vernissage_common::{Pose, SessionId};
use vernissage_input::{InputEvent, KeyCode};
use vernissage_texture::{Color, FALLBACK_COLOR, TextureLookup};

/// How long the navigation hint stays on screen after mounting.
pub const HINT_SECONDS: f32 = 5.0;
pub const CONTROLS_HINT: &str = "WASD or arrow keys to move. Drag to look. Click artwork to view.";

/// A press and release closer than this, in pixels, is a click.
const CLICK_SLOP: f32 = 4.0;

/// The artwork shown in the detail card.
#[derive(Debug, Clone, Copy)]
pub struct ArtworkDetail<'a> {
    pub artwork: &'a Artwork,
    /// Card tint taken from the artwork's texture style.
    pub accent: Color,
}

/// One mounted gallery walkthrough.
///
/// Owns the camera controller and the composed scene for as long as the
/// viewer is on screen. Dropping the session unmounts it.
pub struct ViewerSession {
    id: SessionId,
    controller: CameraController,
    scene: GalleryScene,
    viewport: Vec2,
    pointer: Option<Vec2>,
    press: Option<Vec2>,
    selected: Option<usize>,
    elapsed: f32,
    frames: u64,
}

impl ViewerSession {
    /// Build the controller and hang the gallery.
    pub fn mount(
        gallery: &Gallery,
        config: CameraConfig,
        textures: &mut impl TextureLookup,
    ) -> Self {
        let id = SessionId::new();
        let scene = GalleryScene::compose(gallery, RoomLayout::standard(), textures);
        let controller = CameraController::new(config);
        tracing::info!(
            session = %id,
            gallery = %gallery.id,
            hung = scene.panels().len(),
            "viewer mounted"
        );
        Self {
            id,
            controller,
            scene,
            viewport: Vec2::new(1280.0, 720.0),
            pointer: None,
            press: None,
            selected: None,
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn scene(&self) -> &GalleryScene {
        &self.scene
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn pose(&self) -> Pose {
        self.controller.pose()
    }

    /// Seconds of frame time since mount.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Resize the drawing surface. Zero sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
            self.controller.aspect = width / height;
        }
    }

    pub fn controls_hint_visible(&self) -> bool {
        self.elapsed < HINT_SECONDS
    }

    /// Forward an input event to the camera and track pointer clicks.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(KeyCode::Escape) => self.close_artwork(),
            InputEvent::PointerDown { position } => {
                self.pointer = Some(position);
                self.press = Some(position);
            }
            InputEvent::PointerMove { position } => self.pointer = Some(position),
            InputEvent::PointerUp => {
                let clicked = match (self.press.take(), self.pointer) {
                    (Some(down), Some(up)) => down.distance(up) <= CLICK_SLOP,
                    _ => false,
                };
                if clicked {
                    self.click();
                }
            }
            _ => {}
        }
        self.controller.on_input_event(event);
    }

    /// Advance one frame: camera first, then hover and highlight easing.
    pub fn frame(&mut self, delta: f32) -> Pose {
        let _span = tracing::debug_span!("frame", session = %self.id, n = self.frames).entered();
        let pose = self.controller.on_frame(delta);

        // The detail card covers the room.
        let hovered = match (self.selected, self.pointer) {
            (None, Some(p)) => self.pick_screen(p),
            _ => None,
        };
        self.scene.set_hovered(hovered);
        self.scene.tick();

        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
        self.frames += 1;
        pose
    }

    /// Panel under a viewport position, in pixels from the top left.
    pub fn pick_screen(&self, position: Vec2) -> Option<usize> {
        let ndc = Vec2::new(
            position.x / self.viewport.x * 2.0 - 1.0,
            1.0 - position.y / self.viewport.y * 2.0,
        );
        let inverse = self.controller.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        self.scene.pick(near, far - near)
    }

    /// Open the detail card for the hovered panel, or close an open card.
    pub fn click(&mut self) {
        if self.selected.is_some() {
            self.close_artwork();
        } else if let Some(index) = self.scene.hovered() {
            self.select_artwork(index);
        }
    }

    /// Open the detail card for a hung panel. Out-of-range indices are ignored.
    pub fn select_artwork(&mut self, index: usize) -> Option<&Artwork> {
        let panel = self.scene.panel(index)?;
        tracing::debug!(session = %self.id, artwork = %panel.artwork.id, "artwork opened");
        self.selected = Some(index);
        Some(&panel.artwork)
    }

    pub fn close_artwork(&mut self) {
        if let Some(index) = self.selected.take() {
            tracing::debug!(session = %self.id, index, "artwork closed");
        }
    }

    pub fn selected(&self) -> Option<ArtworkDetail<'_>> {
        let panel = self.scene.panel(self.selected?)?;
        let accent = panel
            .texture
            .style()
            .map_or(FALLBACK_COLOR, |style| style.accent());
        Some(ArtworkDetail {
            artwork: &panel.artwork,
            accent,
        })
    }

    pub fn view(&self) -> RenderView {
        RenderView::from_pose(&self.pose(), self.controller.config().fov_degrees)
    }

    pub fn render<R: Renderer>(&self, renderer: &R) -> R::Output {
        renderer.render(&self.scene, &self.view())
    }
}

impl Drop for ViewerSession {
    fn drop(&mut self) {
        self.controller.release_all();
        tracing::info!(
            session = %self.id,
            frames = self.frames,
            elapsed = self.elapsed,
            "viewer unmounted"
        );
    }
}
