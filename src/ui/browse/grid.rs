//! The listing card grid.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::api::types::ListingSummary;
use crate::ui::components::HeartIcon;

/// Grid of listing cards.
#[component]
pub fn ListingGrid(
    listings: Vec<ListingSummary>,
    signed_in: bool,
    favourites: HashSet<i64>,
) -> impl IntoView {
    let cards = listings
        .into_iter()
        .map(|listing| {
            let liked = favourites.contains(&listing.property_id);
            view! { <ListingCard listing=listing signed_in=signed_in liked=liked/> }
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 2xl:grid-cols-6 gap-8">
            {cards}
        </div>
    }
}

/// One listing card: image, heart toggle for signed-in users, and the
/// summary line linking to the detail page.
#[component]
pub fn ListingCard(listing: ListingSummary, signed_in: bool, liked: bool) -> impl IntoView {
    let detail_href = format!("/properties/{}", listing.property_id);
    let title = format!(
        "{} in {}",
        listing.room_type.as_deref().unwrap_or("Listing"),
        listing.region.as_deref().unwrap_or("Singapore"),
    );
    let price = format!("$ {}", listing.price.as_deref().unwrap_or("-"));
    let rating = format!("★ {}", listing.rating.as_deref().unwrap_or("-"));

    let image = listing.image_url.clone().map(|url| {
        view! { <img src=url class="w-full h-64 object-cover rounded-3xl"/> }
    });
    let heart = signed_in.then(|| {
        view! { <FavouriteToggle property_id=listing.property_id liked=liked/> }
    });

    view! {
        <div class="rounded-lg flex flex-col h-full overflow-hidden relative cursor-pointer hover:shadow-lg transition-shadow duration-200">
            {image}
            {heart}
            <a href=detail_href target="_blank">
                <div class="flex-1 w-full text-left">
                    <div class="p-4 text-left">
                        <h2 class="text-gray-800 text-xl font-semibold mb-2">{title}</h2>
                        <p class="text-gray-800 font-bold mb-2">{price}</p>
                        <p class="text-gray-500 text-sm mb-4">{rating}</p>
                    </div>
                </div>
            </a>
        </div>
    }
}

/// The heart button. Posting swaps the button itself, so only the heart
/// re-renders; membership flips locally no matter what the upstream said.
#[component]
pub fn FavouriteToggle(property_id: i64, liked: bool) -> impl IntoView {
    let url = format!("/fragments/like/{property_id}");

    view! {
        <button
            class="absolute top-3 right-6 rounded-full hover:scale-110 transition-transform duration-150"
            hx-post=url
            hx-swap="outerHTML"
        >
            <HeartIcon filled=liked/>
        </button>
    }
}
