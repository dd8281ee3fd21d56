//! Filter sidebar: sort, stay duration, and the three toggle groups.

use leptos::prelude::*;

use crate::browse::filters::{FilterGroup, SHORT_TERM_HOUSE_TYPE};
use crate::browse::{DisplayMode, FilterSelection, SortOrder, StayDuration};

/// The sidebar form. Checkbox changes only update state in the form; listings
/// reload on Apply (which resets to page 1) or on a sort change (which keeps
/// the current page). Changing the stay duration re-renders just the sidebar
/// so the house-type group can lock.
#[component]
pub fn FilterSidebar(
    selection: FilterSelection,
    sort: SortOrder,
    mode: DisplayMode,
    /// The currently loaded page, so a sort change stays on it.
    page: u32,
    /// Raw search string when the grid shows a search result.
    pid: Option<String>,
) -> impl IntoView {
    let sort_target = match mode {
        DisplayMode::TopListings => "/fragments/listings",
        DisplayMode::SearchResult => "/fragments/search",
        DisplayMode::Favourites => "/fragments/favourites",
        DisplayMode::Recommended => "/fragments/recommendations",
    };
    // Search results can only be re-sorted by re-posting the id lookup.
    let sort_is_post = mode == DisplayMode::SearchResult;

    let filter_controls = mode.shows_filter_controls().then(|| {
        let locked = selection.house_types_locked();
        view! {
            <div class="mb-6">
                <label class="block font-semibold mb-2">"Stay Duration"</label>
                <select
                    name="duration"
                    class="w-full px-3 py-2 border rounded-md"
                    hx-get="/fragments/sidebar"
                    hx-trigger="change"
                    hx-include="closest form"
                    hx-target="#filter-sidebar"
                    hx-swap="outerHTML"
                >
                    <option value="long-term" selected=(selection.duration == StayDuration::LongTerm)>
                        "Longer than 3 Months"
                    </option>
                    <option value="short-term" selected=(selection.duration == StayDuration::ShortTerm)>
                        "Less than 3 Months"
                    </option>
                </select>
            </div>

            <CheckboxGroup title="House Type" name="types" group=selection.house_types.clone() locked=locked/>
            <CheckboxGroup title="Regions" name="regions" group=selection.regions.clone() locked=false/>
            <CheckboxGroup title="Number of Guests" name="accommodates" group=selection.accommodates.clone() locked=false/>

            <div class="mt-4">
                <button
                    type="button"
                    class="w-full bg-blue-600 text-white py-2 rounded-2xl cursor-pointer hover:bg-blue-700"
                    hx-get="/fragments/listings"
                    hx-include="closest form"
                    hx-vals="{\"page\": 1}"
                    hx-target="#browse-content"
                    hx-swap="outerHTML"
                >
                    "Apply filters"
                </button>
            </div>
        }
    });

    let hidden_pid = pid.map(|pid| {
        view! { <input type="hidden" name="pid" value=pid/> }
    });

    view! {
        <aside
            id="filter-sidebar"
            class="w-64 text-black bg-white rounded-2xl shadow-md p-6 mr-8 mt-2 flex-shrink-0 self-start"
        >
            <h3 class="text-lg font-bold mb-4 text-blue-700">"Filter Listings"</h3>

            <form>
                <input type="hidden" name="page" value=page.to_string()/>
                {hidden_pid}

                <div class="mb-6">
                    <label class="block font-semibold mb-2">"Sort"</label>
                    <select
                        name="sort"
                        class="w-full px-3 py-2 border rounded-md"
                        hx-get=(!sort_is_post).then_some(sort_target)
                        hx-post=sort_is_post.then_some(sort_target)
                        hx-trigger="change"
                        hx-include="closest form"
                        hx-target="#browse-content"
                        hx-swap="outerHTML"
                    >
                        <option value="rating" selected=(sort == SortOrder::Rating)>"Ratings"</option>
                        <option value="price-asc" selected=(sort == SortOrder::PriceAsc)>"Price: Low to High"</option>
                        <option value="price-desc" selected=(sort == SortOrder::PriceDesc)>"Price: High to Low"</option>
                    </select>
                </div>

                {filter_controls}
            </form>
        </aside>
    }
}

/// One titled checkbox column. When locked, every box is disabled and only
/// the short-term house type stays checked.
#[component]
fn CheckboxGroup(
    title: &'static str,
    name: &'static str,
    group: FilterGroup,
    locked: bool,
) -> impl IntoView {
    // Disabled boxes never submit, so the locked group round-trips its forced
    // value through a hidden field. Switching back to long-term then starts
    // from that value, the same leftover a live toggle would have produced.
    let forced = locked.then(|| {
        view! { <input type="hidden" name=name value=SHORT_TERM_HOUSE_TYPE/> }
    });

    let boxes = group
        .iter()
        .map(|(label, on)| {
            let checked = if locked {
                label == SHORT_TERM_HOUSE_TYPE
            } else {
                on
            };
            view! {
                <label class="flex items-center gap-2 cursor-pointer">
                    <input
                        type="checkbox"
                        name=name
                        value=label
                        checked=checked
                        disabled=locked
                        class="accent-blue-600"
                    />
                    <span>{label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="mb-6">
            <label class="block font-semibold mb-2">{title}</label>
            {forced}
            <div class="flex flex-col gap-2">{boxes}</div>
        </div>
    }
}
