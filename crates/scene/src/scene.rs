use crate::room::{PANEL_SIZE, RoomLayout};
use glam::Vec3;
use vernissage_catalog::{Artwork, Gallery};
use vernissage_common::Placement;
use vernissage_texture::{TextureHandle, TextureLookup};

/// Emissive intensity a hovered panel eases toward.
pub const EMISSIVE_HOVERED: f32 = 0.4;
/// Emissive intensity of a panel at rest.
pub const EMISSIVE_IDLE: f32 = 0.1;
const EMISSIVE_EASE: f32 = 0.08;

/// One hung artwork: its slot, texture and hover highlight.
#[derive(Debug, Clone)]
pub struct ArtworkPanel {
    pub artwork: Artwork,
    pub placement: Placement,
    pub texture: TextureHandle,
    hovered: bool,
    emissive: f32,
}

impl ArtworkPanel {
    fn new(artwork: Artwork, placement: Placement, texture: TextureHandle) -> Self {
        Self {
            artwork,
            placement,
            texture,
            hovered: false,
            emissive: EMISSIVE_IDLE,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current canvas glow. Eases over several frames.
    pub fn emissive(&self) -> f32 {
        self.emissive
    }

    /// Frame glow switches immediately with hover.
    pub fn frame_emissive(&self) -> f32 {
        if self.hovered { 0.3 } else { 0.1 }
    }

    fn tick(&mut self) {
        let target = if self.hovered {
            EMISSIVE_HOVERED
        } else {
            EMISSIVE_IDLE
        };
        self.emissive += (target - self.emissive) * EMISSIVE_EASE;
    }

    /// Distance along the ray to the front face of the canvas, if hit.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let normal = self.placement.normal();
        let denom = direction.dot(normal);
        // Back faces are not pickable.
        if denom >= -f32::EPSILON {
            return None;
        }
        let t = (self.placement.position - origin).dot(normal) / denom;
        if t <= 0.0 {
            return None;
        }
        let hit = origin + direction * t;
        let local = self.placement.rotation().inverse() * (hit - self.placement.position);
        let half = PANEL_SIZE / 2.0;
        (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
    }
}

/// A gallery hung in a room.
#[derive(Debug, Clone)]
pub struct GalleryScene {
    gallery_id: String,
    title: String,
    artist: String,
    total_artworks: usize,
    layout: RoomLayout,
    panels: Vec<ArtworkPanel>,
}

impl GalleryScene {
    /// Hang the first artworks of `gallery` in the layout's slots, resolving
    /// each image key through `textures`.
    pub fn compose(
        gallery: &Gallery,
        layout: RoomLayout,
        textures: &mut impl TextureLookup,
    ) -> Self {
        let _span = tracing::debug_span!("compose", gallery = %gallery.id).entered();

        let panels: Vec<ArtworkPanel> = gallery
            .artworks
            .iter()
            .zip(&layout.placements)
            .map(|(artwork, placement)| {
                let texture = textures.texture(&artwork.image_key);
                ArtworkPanel::new(artwork.clone(), *placement, texture)
            })
            .collect();

        let unhung = gallery.artworks.len() - panels.len();
        if unhung > 0 {
            tracing::debug!(unhung, "more artworks than wall slots");
        }

        Self {
            gallery_id: gallery.id.clone(),
            title: gallery.title.clone(),
            artist: gallery.artist.name.clone(),
            total_artworks: gallery.artworks.len(),
            layout,
            panels,
        }
    }

    pub fn gallery_id(&self) -> &str {
        &self.gallery_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Works in the gallery, hung or not.
    pub fn total_artworks(&self) -> usize {
        self.total_artworks
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn panels(&self) -> &[ArtworkPanel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&ArtworkPanel> {
        self.panels.get(index)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.hovered)
    }

    /// Mark at most one panel as hovered.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.hovered = Some(i) == index;
        }
    }

    /// Ease every panel's highlight one frame toward its target.
    pub fn tick(&mut self) {
        for panel in &mut self.panels {
            panel.tick();
        }
    }

    /// Nearest panel hit by the ray.
    pub fn pick(&self, origin: Vec3, direction: Vec3) -> Option<usize> {
        let direction = direction.try_normalize()?;
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.intersect(origin, direction).map(|t| (i, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}
