use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub handle: String,
    /// Initials shown in place of a photo.
    pub avatar: String,
    pub location: String,
    pub followers: u64,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: Artist,
    /// Texture key for the procedural image.
    pub image_key: String,
    pub medium: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryStyle {
    Minimalist,
    Immersive,
    Surreal,
    Classical,
    Digital,
    Abstract,
}

impl GalleryStyle {
    pub const ALL: [GalleryStyle; 6] = [
        GalleryStyle::Abstract,
        GalleryStyle::Minimalist,
        GalleryStyle::Digital,
        GalleryStyle::Immersive,
        GalleryStyle::Surreal,
        GalleryStyle::Classical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GalleryStyle::Minimalist => "minimalist",
            GalleryStyle::Immersive => "immersive",
            GalleryStyle::Surreal => "surreal",
            GalleryStyle::Classical => "classical",
            GalleryStyle::Digital => "digital",
            GalleryStyle::Abstract => "abstract",
        }
    }
}

impl std::fmt::Display for GalleryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: String,
    pub title: String,
    pub artist: Artist,
    pub cover_image: String,
    pub artworks: Vec<Artwork>,
    pub tags: Vec<String>,
    pub style: GalleryStyle,
    pub views: u64,
    pub likes: u64,
    /// ISO-8601 date; compared as a string.
    pub created_at: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

impl Gallery {
    /// Ranking used by the "trending" sort.
    pub fn trending_score(&self) -> f64 {
        self.views as f64 * 0.6 + self.likes as f64 * 0.4
    }

    /// Case-insensitive substring match over title, artist name, tags and
    /// description. `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.artist.name.to_lowercase().contains(query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(query))
            || self.description.to_lowercase().contains(query)
    }
}
