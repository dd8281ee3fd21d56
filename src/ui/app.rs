//! Page assembly: the document shell and the two full pages.

use leptos::prelude::*;

use crate::api::types::PropertyDetails;
use crate::session::ChatMessage;

use super::browse::{BrowseContent, BrowseView, Navbar};
use super::chat::ChatWidget;
use super::detail::{DetailUnavailable, DetailView};

/// Generate the HTML document wrapper around rendered page content.
fn html_shell(title: &str, content: &str, extra_head: &str, extra_body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Rental property listings">
    <title>{title} - Rental System</title>

    <script src="https://unpkg.com/htmx.org@2.0.4"></script>
    <script defer src="https://unpkg.com/alpinejs@3.14.9/dist/cdn.min.js"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="stylesheet" href="/static/app.css">
{extra_head}</head>
<body class="min-h-screen bg-gray-50 antialiased">
    <main class="min-h-screen bg-gray-50">
{content}
    </main>
{extra_body}</body>
</html>"#
    )
}

/// The listing browser page.
#[must_use]
pub fn browse_page(view: BrowseView, transcript: Vec<ChatMessage>) -> String {
    let signed_in = view.signed_in;
    let chat = signed_in.then(|| view! { <ChatWidget transcript=transcript/> });

    let content = view! {
        <Navbar signed_in=signed_in/>
        <div id="modal-root"></div>
        <div class="px-8">
            <BrowseContent view=view/>
        </div>
        {chat}
    }
    .to_html();

    html_shell("Listings", &content, "", "")
}

/// The property detail page. A missing record renders the empty-state card
/// and skips the map entirely.
#[must_use]
pub fn property_page(details: Option<PropertyDetails>) -> String {
    let (extra_head, extra_body) = details
        .as_ref()
        .and_then(PropertyDetails::position)
        .map(marker_scripts)
        .unwrap_or_default();

    let content = match details {
        Some(details) => view! {
            <div class="p-6 text-black">
                <DetailView details=details/>
            </div>
        }
        .to_html(),
        None => view! {
            <div class="p-6 text-black">
                <DetailUnavailable/>
            </div>
        }
        .to_html(),
    };

    html_shell("Property Details", &content, &extra_head, &extra_body)
}

/// Leaflet assets plus the inline script placing the house marker.
fn marker_scripts((latitude, longitude): (f64, f64)) -> (String, String) {
    let head = concat!(
        "    <link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\">\n",
        "    <script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n"
    )
    .to_string();

    let body = format!(
        r#"    <script>
        const position = [{latitude}, {longitude}];
        const map = L.map('listing-map').setView(position, 17);
        L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png').addTo(map);
        const houseIcon = L.icon({{
            iconUrl: 'https://cdn-icons-png.flaticon.com/512/69/69524.png',
            iconSize: [32, 32],
        }});
        L.marker(position, {{ icon: houseIcon }}).addTo(map);
    </script>
"#
    );

    (head, body)
}
