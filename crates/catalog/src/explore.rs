use crate::{Gallery, GalleryStyle};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFilterError {
    #[error("unknown gallery style {0:?}")]
    Style(String),
    #[error("unknown sort option {0:?}")]
    Sort(String),
}

impl FromStr for GalleryStyle {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError::Style(s.to_string()))
    }
}

/// Explore-page ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Weighted blend of views and likes.
    #[default]
    Trending,
    Newest,
    MostViewed,
    MostLiked,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Trending,
        SortOption::MostViewed,
        SortOption::MostLiked,
        SortOption::Newest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Trending => "trending",
            SortOption::Newest => "newest",
            SortOption::MostViewed => "most-viewed",
            SortOption::MostLiked => "most-liked",
        }
    }

    /// Stable in-place sort, highest first.
    pub fn apply(self, galleries: &mut [&Gallery]) {
        match self {
            SortOption::MostViewed => galleries.sort_by(|a, b| b.views.cmp(&a.views)),
            SortOption::MostLiked => galleries.sort_by(|a, b| b.likes.cmp(&a.likes)),
            SortOption::Newest => galleries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOption::Trending => galleries
                .sort_by(|a, b| b.trending_score().total_cmp(&a.trending_score())),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError::Sort(s.to_string()))
    }
}

/// Either every style or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleFilter {
    #[default]
    All,
    Only(GalleryStyle),
}

impl StyleFilter {
    pub fn admits(self, style: GalleryStyle) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(wanted) => wanted == style,
        }
    }
}

impl FromStr for StyleFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StyleFilter::All);
        }
        s.parse().map(StyleFilter::Only)
    }
}

/// Explore page query: free-text search, style filter, ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub style: StyleFilter,
    pub sort: SortOption,
}

impl FilterState {
    /// Search, then filter by style, then sort. Never fails; an empty search
    /// matches everything. Whitespace is part of the query.
    pub fn apply<'a>(&self, galleries: &'a [Gallery]) -> Vec<&'a Gallery> {
        let query = self.search.to_lowercase();
        let mut result: Vec<&Gallery> = galleries
            .iter()
            .filter(|g| self.search.is_empty() || g.matches(&query))
            .filter(|g| self.style.admits(g.style))
            .collect();
        self.sort.apply(&mut result);
        tracing::debug!(
            search = %self.search,
            style = ?self.style,
            sort = %self.sort,
            found = result.len(),
            "explore query"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_styles_and_sorts() {
        assert_eq!("surreal".parse::<GalleryStyle>(), Ok(GalleryStyle::Surreal));
        assert_eq!("ALL".parse::<StyleFilter>(), Ok(StyleFilter::All));
        assert_eq!(
            "digital".parse::<StyleFilter>(),
            Ok(StyleFilter::Only(GalleryStyle::Digital))
        );
        assert_eq!("most-liked".parse::<SortOption>(), Ok(SortOption::MostLiked));
        assert_eq!(
            "popular".parse::<SortOption>(),
            Err(ParseFilterError::Sort("popular".into()))
        );
        assert!(matches!(
            "baroque".parse::<StyleFilter>(),
            Err(ParseFilterError::Style(_))
        ));
    }

    #[test]
    fn default_filter_is_trending_over_everything() {
        let f = FilterState::default();
        assert_eq!(f.search, "");
        assert_eq!(f.style, StyleFilter::All);
        assert_eq!(f.sort, SortOption::Trending);
    }

    #[test]
    fn sort_options_serialize_kebab_case() {
        let json = serde_json::to_string(&SortOption::MostViewed).unwrap();
        assert_eq!(json, "\"most-viewed\"");
    }
}
