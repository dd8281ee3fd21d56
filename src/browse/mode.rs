//! Display modes for the listing grid.

use serde::{Deserialize, Serialize};

/// Which dataset the grid currently shows. Modes are mutually exclusive and
/// control the heading plus which sidebar controls are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// The filtered, paginated query over all listings.
    #[default]
    TopListings,
    /// A single-id lookup.
    SearchResult,
    /// The signed-in user's liked listings.
    Favourites,
    /// Personalised recommendations.
    Recommended,
}

impl DisplayMode {
    /// The grid heading. Rendered even when the dataset failed to load, so a
    /// failed fetch is indistinguishable from zero matches except by label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TopListings => "Top Listings",
            Self::SearchResult => "Search Result",
            Self::Favourites => "Your Favourites",
            Self::Recommended => "Recommended for you",
        }
    }

    /// Filter checkboxes and the stay-duration select only apply to the
    /// paginated query.
    #[must_use]
    pub fn shows_filter_controls(self) -> bool {
        self == Self::TopListings
    }

    /// Pagination likewise.
    #[must_use]
    pub fn shows_pagination(self) -> bool {
        self == Self::TopListings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_page_headings() {
        assert_eq!(DisplayMode::TopListings.label(), "Top Listings");
        assert_eq!(DisplayMode::SearchResult.label(), "Search Result");
        assert_eq!(DisplayMode::Favourites.label(), "Your Favourites");
        assert_eq!(DisplayMode::Recommended.label(), "Recommended for you");
    }

    #[test]
    fn only_top_listings_shows_filters_and_pagination() {
        for mode in [
            DisplayMode::SearchResult,
            DisplayMode::Favourites,
            DisplayMode::Recommended,
        ] {
            assert!(!mode.shows_filter_controls());
            assert!(!mode.shows_pagination());
        }
        assert!(DisplayMode::TopListings.shows_filter_controls());
        assert!(DisplayMode::TopListings.shows_pagination());
    }
}
