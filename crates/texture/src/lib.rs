//! Procedural artwork textures: a software canvas, one drawing routine per
//! style, and a cache that generates each key once.
//!
//! Textures are generated, never loaded. A key that names no style yields a
//! flat fallback image rather than an error.
//!
//! # Invariants
//! - Same key, same pixels: generation reads nothing but the fixed canvas size.
//! - Cache entries are created on first lookup and never evicted or mutated.

pub mod canvas;
mod cache;
mod draw;
mod style;

pub use cache::{
    CacheStats, SharedTextureCache, TextureCache, TextureDigest, TextureError, TextureHandle,
    TextureLookup, art_texture, generate,
};
pub use canvas::{Canvas, Color, Gradient, Paint, Path};
pub use style::{FALLBACK_COLOR, ParseStyleError, TextureStyle};

/// Width of every generated texture, in pixels.
pub const TEXTURE_WIDTH: u32 = 512;
/// Height of every generated texture, in pixels.
pub const TEXTURE_HEIGHT: u32 = 640;

pub fn crate_info() -> &'static str {
    "vernissage-texture v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("texture"));
    }
}
