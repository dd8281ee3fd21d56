//! Prev/Next pagination controls for the top-listings grid.

use leptos::prelude::*;

use crate::browse::pagination::clamp_page;
use crate::browse::{FilterSelection, SortOrder};

use super::listings_fragment_url;

/// Pagination row. The button targets are clamped into `[1, total_pages]` at
/// render time and carry the full filter selection, so a stale click can
/// never leave the valid range.
#[component]
pub fn PaginationControls(
    selection: FilterSelection,
    sort: SortOrder,
    page: u32,
    total_pages: u32,
) -> impl IntoView {
    let prev_url = listings_fragment_url(&selection, sort, clamp_page(page.saturating_sub(1), total_pages));
    let next_url = listings_fragment_url(&selection, sort, clamp_page(page.saturating_add(1), total_pages));
    let label = format!("Page {page} of {total_pages}");

    view! {
        <div class="mt-6 flex items-center justify-center gap-3 text-black">
            <button
                class="px-3 py-1 bg-white border rounded disabled:opacity-50"
                disabled=(page <= 1)
                hx-get=prev_url
                hx-target="#browse-content"
                hx-swap="outerHTML"
            >
                "Prev"
            </button>
            <div class="text-sm">{label}</div>
            <button
                class="px-3 py-1 bg-white border rounded disabled:opacity-50"
                disabled=(page >= total_pages)
                hx-get=next_url
                hx-target="#browse-content"
                hx-swap="outerHTML"
            >
                "Next"
            </button>
        </div>
    }
}
