//! Property detail view.

use leptos::prelude::*;

use crate::api::types::PropertyDetails;
use crate::ui::components::{Card, CardContent};

/// The six fixed rating sub-metrics shown as tiles, derived from the record's
/// `review_scores_*` fields.
#[must_use]
pub fn rating_metrics(details: &PropertyDetails) -> Vec<(&'static str, &'static str, String)> {
    let score = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    vec![
        ("🎯", "Accuracy", score(&details.review_scores_accuracy)),
        ("🧹", "Cleanliness", score(&details.review_scores_cleanliness)),
        ("🔑", "Check-in", score(&details.review_scores_checkin)),
        ("💬", "Communication", score(&details.review_scores_communication)),
        ("📍", "Location", score(&details.review_scores_location)),
        ("💰", "Value", score(&details.review_scores_value)),
    ]
}

/// Full detail card: hero image, summary lines, rating tiles, amenities, and
/// the map container (populated by the page's marker script).
#[component]
pub fn DetailView(details: PropertyDetails) -> impl IntoView {
    let name = details
        .property_name
        .clone()
        .unwrap_or_else(|| "Listing".to_string());
    let price = format!("Price: ${} SGD", details.price.as_deref().unwrap_or("-"));
    let rating = format!("★ {}", details.review_scores_rating.as_deref().unwrap_or("-"));
    let neighbourhood = format!(
        "{}, {}",
        details.neighbourhood_cleansed.as_deref().unwrap_or(""),
        details.neighbourhood_group_cleansed.as_deref().unwrap_or(""),
    );
    let rooms = format!(
        "{} Bedrooms • {} Beds • {} Bathrooms",
        fmt_count(details.bedrooms),
        fmt_count(details.beds),
        fmt_count(details.bathrooms),
    );
    let occupancy = format!(
        "{} guests • {} • {}",
        fmt_count(details.accommodates),
        details.property_type.as_deref().unwrap_or(""),
        details.room_type.as_deref().unwrap_or(""),
    );
    let amenities = details.amenities_display();
    let has_position = details.position().is_some();

    let hero = details.picture_url.clone().map(|url| {
        view! { <img src=url class="w-full h-96 object-cover"/> }
    });
    let tiles = rating_metrics(&details)
        .into_iter()
        .map(|(icon, label, value)| view! { <MetricTile icon=icon label=label value=value/> })
        .collect_view();
    let map = has_position.then(|| {
        view! { <div id="listing-map" class="w-full" style="height: 400px;"></div> }
    });

    view! {
        <Card class="max-w-4xl mx-auto overflow-hidden">
            {hero}
            <div class="p-4">
                <h1 class="text-3xl font-bold mb-1">{name}</h1>
                <p class="text-2xl font-semibold text-gray-800 mb-1">{price}</p>
                <p class="text-2xl text-gray-700 mb-1">{rating}</p>
                <div class="text-gray-800 mb-2">
                    <div>{neighbourhood}</div>
                    <div>{rooms}</div>
                    <div>{occupancy}</div>
                </div>
                <hr class="mb-3"/>
                <div class="text-2xl">"Ratings"</div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4 p-6">{tiles}</div>
                <hr class="mb-3"/>
                <div class="text-2xl">"Amenities"</div>
                <div>{amenities}</div>
            </div>
            {map}
        </Card>
    }
}

/// Empty-state card when the record could not be loaded. Mirrors the grid's
/// degradation: the heading renders, the data simply is not there.
#[component]
pub fn DetailUnavailable() -> impl IntoView {
    view! {
        <Card class="max-w-4xl mx-auto">
            <CardContent>
                <h1 class="text-3xl font-bold mb-1">"Listing"</h1>
                <p class="text-gray-500">"This listing could not be loaded."</p>
            </CardContent>
        </Card>
    }
}

/// One rating tile.
#[component]
fn MetricTile(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 rounded-xl p-4 text-center hover:shadow-md transition-shadow">
            <div class="text-2xl mb-2">{icon}</div>
            <div class="text-sm font-medium text-gray-600 mb-1">{label}</div>
            <div class="text-xl font-bold text-gray-800">{value}</div>
            <div class="text-xs text-gray-400 mt-1">"/5 rating"</div>
        </div>
    }
}

/// Render a float count the way the upstream means it: whole numbers lose the
/// fraction.
fn fmt_count(value: Option<f64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_cover_the_six_sub_scores_in_order() {
        let details: PropertyDetails = serde_json::from_value(serde_json::json!({
            "property_id": 1,
            "review_scores_accuracy": "4.8",
            "review_scores_cleanliness": "4.9",
            "review_scores_checkin": "5.0",
            "review_scores_communication": "4.7",
            "review_scores_location": "4.6",
            "review_scores_value": "4.5"
        }))
        .unwrap();

        let metrics = rating_metrics(&details);
        let labels: Vec<&str> = metrics.iter().map(|(_, label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Accuracy",
                "Cleanliness",
                "Check-in",
                "Communication",
                "Location",
                "Value"
            ]
        );
        assert_eq!(metrics[0].2, "4.8");
    }

    #[test]
    fn missing_scores_render_as_placeholders() {
        let details: PropertyDetails =
            serde_json::from_value(serde_json::json!({"property_id": 2})).unwrap();
        assert!(rating_metrics(&details).iter().all(|(_, _, v)| v == "-"));
    }
}
