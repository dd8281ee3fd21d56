//! Top navigation bar: brand, id search, and the account menu.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, MenuIcon, SearchIcon};

/// Sticky navbar. The brand link reloads the page (back to top listings);
/// the search form swaps the grid with a single-id lookup; the menu opens
/// the account dropdown.
#[component]
pub fn Navbar(signed_in: bool) -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm py-4 px-8 flex items-center justify-between mb-8 sticky top-0 z-40">
            <a href="/" class="text-xl font-bold text-blue-700 cursor-pointer">"Rental System"</a>

            <form
                class="flex items-center gap-2 h-10 bg-gray-100 rounded-xl pl-3"
                hx-post="/fragments/search"
                hx-target="#browse-content"
                hx-swap="outerHTML"
            >
                <input
                    name="pid"
                    type="text"
                    placeholder="Search Id"
                    class="text-black text-xl outline-none bg-transparent"
                />
                <Button variant=ButtonVariant::Primary button_type="submit" class="gap-1">
                    <SearchIcon/>
                    "Search"
                </Button>
            </form>

            <div class="relative" x-data="{ open: false }">
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded-full hover:bg-blue-700 cursor-pointer transition"
                    x-on:click="open = !open"
                >
                    <MenuIcon/>
                </button>

                <div
                    x-show="open"
                    x-on:click.outside="open = false"
                    class="absolute right-0 mt-2 w-72 bg-white rounded-3xl shadow-lg p-4 z-50 text-black"
                >
                    <AccountMenu signed_in=signed_in/>
                </div>
            </div>
        </nav>
    }
}

/// Menu rows. Favourites and recommendations need a signed-in session; the
/// server answers those with the sign-in modal when the session is anonymous.
#[component]
fn AccountMenu(signed_in: bool) -> impl IntoView {
    let row = "w-full h-14 text-xl rounded-2xl hover:bg-gray-200 cursor-pointer";

    let auth_row = if signed_in {
        view! {
            <button class=row hx-post="/fragments/logout" hx-swap="none">
                "Log Out"
            </button>
        }
        .into_any()
    } else {
        view! {
            <button class=row hx-get="/fragments/signin" hx-target="#modal-root" hx-swap="innerHTML">
                "Log in or sign up"
            </button>
        }
        .into_any()
    };

    view! {
        {auth_row}
        <button
            class=row
            hx-get="/fragments/favourites"
            hx-target="#browse-content"
            hx-swap="outerHTML"
        >
            "Favourites"
        </button>
        <button
            class=row
            hx-get="/fragments/recommendations"
            hx-target="#browse-content"
            hx-swap="outerHTML"
        >
            "Recommended for you"
        </button>
    }
}
