//! Listing-browser components: navbar, filter sidebar, grid, pagination, and
//! the sign-in modal.

mod content;
mod grid;
mod navbar;
mod pagination;
mod sidebar;
mod signin;

pub use content::{BrowseContent, BrowseView};
pub use grid::{FavouriteToggle, ListingGrid};
pub use navbar::Navbar;
pub use pagination::PaginationControls;
pub use sidebar::FilterSidebar;
pub use signin::SignInModal;

use crate::browse::{FilterSelection, SortOrder};

/// Build the listings-fragment URL for a given selection, sort, and page.
/// Used by the pagination controls so Prev/Next carry the full filter state.
#[must_use]
pub fn listings_fragment_url(
    selection: &FilterSelection,
    sort: SortOrder,
    page: u32,
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (label, on) in selection.house_types.iter() {
        if on {
            query.append_pair("types", label);
        }
    }
    for (label, on) in selection.regions.iter() {
        if on {
            query.append_pair("regions", label);
        }
    }
    for (label, on) in selection.accommodates.iter() {
        if on {
            query.append_pair("accommodates", label);
        }
    }
    query.append_pair("duration", selection.duration.as_str());
    query.append_pair("sort", sort.as_str());
    query.append_pair("page", &page.to_string());
    format!("/fragments/listings?{}", query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::StayDuration;

    #[test]
    fn fragment_url_carries_the_whole_selection() {
        let mut selection = FilterSelection::default();
        selection.regions.set("East", false);
        let url = listings_fragment_url(&selection, SortOrder::PriceAsc, 3);

        assert!(url.starts_with("/fragments/listings?"));
        assert!(url.contains("types=Private+room"));
        assert!(!url.contains("regions=East"));
        assert!(url.contains("sort=price-asc"));
        assert!(url.ends_with("page=3"));
    }

    #[test]
    fn short_term_url_only_offers_the_hotel_type() {
        let selection = FilterSelection::from_params(
            &["Private room".to_string(), "Hotel room".to_string()],
            &[],
            &[],
            StayDuration::ShortTerm,
        );
        let url = listings_fragment_url(&selection, SortOrder::Rating, 1);
        assert!(url.contains("types=Hotel+room"));
        assert!(!url.contains("types=Private+room"));
    }
}
