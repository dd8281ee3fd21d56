//! The swappable browse region: sidebar plus listing section.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::api::types::ListingSummary;
use crate::browse::{DisplayMode, FilterSelection, SortOrder};

use super::{FilterSidebar, ListingGrid, PaginationControls};

/// Everything a browse fragment needs to render. Handlers assemble one of
/// these per request; filter state never lives on the server between
/// requests.
#[derive(Debug, Clone)]
pub struct BrowseView {
    pub selection: FilterSelection,
    pub sort: SortOrder,
    pub mode: DisplayMode,
    /// The already-sorted page of listings.
    pub listings: Vec<ListingSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub signed_in: bool,
    /// Local favourites membership, for the heart badges.
    pub favourites: HashSet<i64>,
    /// The raw search string, kept so re-sorting a search result can re-post
    /// it.
    pub pid: Option<String>,
}

impl BrowseView {
    /// An empty grid in the given mode, used when a read fails. The heading
    /// still renders from the mode label.
    #[must_use]
    pub fn empty(mode: DisplayMode, selection: FilterSelection, sort: SortOrder) -> Self {
        Self {
            selection,
            sort,
            mode,
            listings: Vec::new(),
            page: 1,
            total_pages: 1,
            signed_in: false,
            favourites: HashSet::new(),
            pid: None,
        }
    }
}

/// The `#browse-content` region swapped by every listing fragment.
#[component]
pub fn BrowseContent(view: BrowseView) -> impl IntoView {
    let heading = view.mode.label();
    let show_pagination = view.mode.shows_pagination();
    let pagination = show_pagination.then(|| {
        view! {
            <PaginationControls
                selection=view.selection.clone()
                sort=view.sort
                page=view.page
                total_pages=view.total_pages
            />
        }
    });

    view! {
        <div id="browse-content" class="flex">
            <FilterSidebar
                selection=view.selection.clone()
                sort=view.sort
                mode=view.mode
                page=view.page
                pid=view.pid.clone()
            />

            <div class="flex-1">
                <section class="mb-12">
                    <h2 class="text-black text-2xl font-semibold mb-6">{heading}</h2>
                    <ListingGrid
                        listings=view.listings
                        signed_in=view.signed_in
                        favourites=view.favourites
                    />
                    {pagination}
                </section>
            </div>
        </div>
    }
}
