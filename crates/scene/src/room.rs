use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use vernissage_common::Placement;
use vernissage_texture::Color;

/// Artwork canvas size in metres (width, height).
pub const PANEL_SIZE: Vec2 = Vec2::new(2.4, 3.0);
/// Gold frame behind each canvas.
pub const FRAME_SIZE: Vec2 = Vec2::new(2.6, 3.2);

const WALL_COLOR: Color = Color::hex(0x0d0d14);

/// A flat rectangle of the room shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub name: &'static str,
    pub center: Vec3,
    /// Width and height in the surface's own plane.
    pub size: Vec2,
    /// Unit vector the visible face points along.
    pub normal: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
    pub color: Color,
    /// Cut-off distance in metres.
    pub distance: f32,
    pub decay: f32,
}

impl PointLight {
    fn ceiling(x: f32, z: f32, target_z: f32) -> Self {
        Self {
            position: Vec3::new(x, 4.8, z),
            target: Vec3::new(x, 2.0, target_z),
            intensity: 1.2,
            color: Color::hex(0xc4b0f0),
            distance: 8.0,
            decay: 2.0,
        }
    }
}

/// Fixed geometry of the walkthrough room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub surfaces: Vec<Surface>,
    pub ambient: Color,
    pub ambient_intensity: f32,
    pub lights: Vec<PointLight>,
    /// Wall slots for artworks, filled in order.
    pub placements: Vec<Placement>,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoomLayout {
    /// The 16 x 18 x 5.5 m room with five ceiling lights and six slots.
    pub fn standard() -> Self {
        let (width, depth, height) = (16.0, 18.0, 5.5);
        let mid = height / 2.0;
        let surfaces = vec![
            Surface {
                name: "floor",
                center: Vec3::ZERO,
                size: Vec2::new(width, depth),
                normal: Vec3::Y,
                color: Color::hex(0x0a0a0f),
            },
            Surface {
                name: "ceiling",
                center: Vec3::new(0.0, height, 0.0),
                size: Vec2::new(width, depth),
                normal: Vec3::NEG_Y,
                color: Color::hex(0x080810),
            },
            Surface {
                name: "back wall",
                center: Vec3::new(0.0, mid, -8.0),
                size: Vec2::new(width, height),
                normal: Vec3::Z,
                color: WALL_COLOR,
            },
            Surface {
                name: "front wall",
                center: Vec3::new(0.0, mid, 7.5),
                size: Vec2::new(width, height),
                normal: Vec3::NEG_Z,
                color: WALL_COLOR,
            },
            Surface {
                name: "left wall",
                center: Vec3::new(-7.0, mid, 0.0),
                size: Vec2::new(depth, height),
                normal: Vec3::X,
                color: WALL_COLOR,
            },
            Surface {
                name: "right wall",
                center: Vec3::new(7.0, mid, 0.0),
                size: Vec2::new(depth, height),
                normal: Vec3::NEG_X,
                color: WALL_COLOR,
            },
        ];

        let lights = vec![
            PointLight::ceiling(-4.0, -4.0, -6.0),
            PointLight::ceiling(0.0, -4.0, -6.0),
            PointLight::ceiling(4.0, -4.0, -6.0),
            PointLight::ceiling(-4.0, 4.0, 6.0),
            PointLight::ceiling(4.0, 4.0, 6.0),
        ];

        let placements = vec![
            Placement::new(Vec3::new(-4.5, 2.5, -5.0), FRAC_PI_2),
            Placement::new(Vec3::new(0.0, 2.5, -7.8), 0.0),
            Placement::new(Vec3::new(4.5, 2.5, -5.0), -FRAC_PI_2),
            Placement::new(Vec3::new(-4.5, 2.5, 1.0), FRAC_PI_2),
            Placement::new(Vec3::new(4.5, 2.5, 1.0), -FRAC_PI_2),
            Placement::new(Vec3::new(0.0, 2.5, -1.0), 0.0),
        ];

        Self {
            width,
            depth,
            height,
            surfaces,
            ambient: Color::hex(0x1a0a30),
            ambient_intensity: 0.08,
            lights,
            placements,
        }
    }

    pub fn capacity(&self) -> usize {
        self.placements.len()
    }

    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.name == name)
    }
}
