use crate::{FilterState, Gallery};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN: &str = include_str!("../data/galleries.json");

/// Errors from loading or saving a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate gallery id: {0}")]
    DuplicateGallery(String),
}

/// Immutable list of galleries in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    galleries: Vec<Gallery>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate gallery ids.
    pub fn new(galleries: Vec<Gallery>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for g in &galleries {
            if !seen.insert(g.id.as_str()) {
                return Err(CatalogError::DuplicateGallery(g.id.clone()));
            }
        }
        Ok(Self { galleries })
    }

    /// The mock catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: Catalog = serde_json::from_str(text)?;
        Self::new(raw.galleries)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            galleries = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Gallery> {
        self.galleries.iter().find(|g| g.id == id)
    }

    /// Galleries flagged for the landing page, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Gallery> {
        self.galleries.iter().filter(|g| g.featured)
    }

    pub fn explore(&self, filter: &FilterState) -> Vec<&Gallery> {
        filter.apply(&self.galleries)
    }

    /// Every distinct artwork image key, first occurrence first.
    pub fn image_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.galleries
            .iter()
            .flat_map(|g| g.artworks.iter())
            .map(|a| a.image_key.as_str())
            .filter(|k| seen.insert(*k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GalleryStyle, SortOption, StyleFilter};

    fn ids<'a>(galleries: &[&'a Gallery]) -> Vec<&'a str> {
        galleries.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.find("gallery-violet-drift").is_some());
        assert!(catalog.find("gallery-missing").is_none());
    }

    #[test]
    fn featured_galleries() {
        let catalog = Catalog::builtin().unwrap();
        let featured: Vec<_> = catalog.featured().map(|g| g.id.as_str()).collect();
        assert_eq!(
            featured,
            vec![
                "gallery-violet-drift",
                "gallery-concrete-dreams",
                "gallery-woven-signals"
            ]
        );
    }

    #[test]
    fn trending_is_the_default_order() {
        let catalog = Catalog::builtin().unwrap();
        let result = catalog.explore(&FilterState::default());
        assert_eq!(
            ids(&result),
            vec![
                "gallery-woven-signals",
                "gallery-violet-drift",
                "gallery-concrete-dreams",
                "gallery-quiet-geometry",
                "gallery-old-gods",
                "gallery-after-dark",
            ]
        );
    }

    #[test]
    fn newest_first() {
        let catalog = Catalog::builtin().unwrap();
        let filter = FilterState {
            sort: SortOption::Newest,
            ..FilterState::default()
        };
        let result = catalog.explore(&filter);
        assert_eq!(result[0].id, "gallery-old-gods");
        assert_eq!(result[5].id, "gallery-quiet-geometry");
    }

    #[test]
    fn most_liked_and_most_viewed() {
        let catalog = Catalog::builtin().unwrap();
        let liked = catalog.explore(&FilterState {
            sort: SortOption::MostLiked,
            ..FilterState::default()
        });
        assert_eq!(liked[2].id, "gallery-quiet-geometry");
        let viewed = catalog.explore(&FilterState {
            sort: SortOption::MostViewed,
            ..FilterState::default()
        });
        assert_eq!(viewed[2].id, "gallery-concrete-dreams");
        assert!(viewed.windows(2).all(|w| w[0].views >= w[1].views));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let catalog = Catalog::builtin().unwrap();
        let by_tag = catalog.explore(&FilterState {
            search: "City".into(),
            ..FilterState::default()
        });
        assert_eq!(
            ids(&by_tag),
            vec!["gallery-concrete-dreams", "gallery-after-dark"]
        );

        let by_artist = catalog.explore(&FilterState {
            search: "ARIA".into(),
            ..FilterState::default()
        });
        assert_eq!(ids(&by_artist), vec!["gallery-violet-drift"]);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let catalog = Catalog::builtin().unwrap();
        let blank = catalog.explore(&FilterState {
            search: "   ".into(),
            ..FilterState::default()
        });
        assert!(blank.is_empty());

        let spaced = catalog.explore(&FilterState {
            search: " city".into(),
            ..FilterState::default()
        });
        assert_eq!(ids(&spaced), vec!["gallery-after-dark"]);
    }

    #[test]
    fn style_filter_combines_with_search() {
        let catalog = Catalog::builtin().unwrap();
        let surreal = catalog.explore(&FilterState {
            style: StyleFilter::Only(GalleryStyle::Surreal),
            ..FilterState::default()
        });
        assert_eq!(ids(&surreal), vec!["gallery-old-gods"]);

        let none = catalog.explore(&FilterState {
            search: "city".into(),
            style: StyleFilter::Only(GalleryStyle::Surreal),
            sort: SortOption::Trending,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut galleries = catalog.galleries().to_vec();
        galleries.push(galleries[0].clone());
        assert!(matches!(
            Catalog::new(galleries),
            Err(CatalogError::DuplicateGallery(id)) if id == "gallery-violet-drift"
        ));
    }

    #[test]
    fn image_keys_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let keys = catalog.image_keys();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert!(keys.contains(&"forgotten-texture"));
        assert_eq!(keys[0], "abstract-purple");
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let catalog = Catalog::builtin().unwrap();
        catalog.save(tmp.path()).unwrap();

        let loaded = Catalog::load(tmp.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{\"galleries\": 3}"),
            Err(CatalogError::Json(_))
        ));
    }
}
