//! Gallery catalog: a static list of galleries, their artists and artworks.
//!
//! The catalog is read-only once loaded. Artwork image keys are the texture
//! keys the viewer resolves through the texture cache.

mod explore;
mod model;
mod store;

pub use explore::{FilterState, ParseFilterError, SortOption, StyleFilter};
pub use model::{Artist, Artwork, Gallery, GalleryStyle};
pub use store::{Catalog, CatalogError};

pub fn crate_info() -> &'static str {
    "vernissage-catalog v0.1.0"
}
