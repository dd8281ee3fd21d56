//! Wire types for the listings API.
//!
//! The upstream is loose with scalar types: `price` and the `review_scores_*`
//! fields arrive sometimes as JSON numbers and sometimes as strings, and most
//! fields can be null. Everything user-visible is therefore decoded leniently
//! into optional strings and parsed at the point of use.

use serde::{Deserialize, Deserializer};

/// Accept a string, a number, or null where the upstream cannot make up its
/// mind.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.map(|r| match r {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// A listing summary as shown on a grid card.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingSummary {
    pub property_id: i64,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub accommodates: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: Option<String>,
}

/// One page of the listings query: the rows plus the unpaginated total.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub data: Vec<ListingSummary>,
    #[serde(default)]
    pub total: u64,
}

/// The `/search` endpoint returns either a bare listing or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Many(Vec<ListingSummary>),
    One(Box<ListingSummary>),
}

impl From<SearchResponse> for Vec<ListingSummary> {
    fn from(response: SearchResponse) -> Self {
        match response {
            SearchResponse::Many(listings) => listings,
            SearchResponse::One(listing) => vec![*listing],
        }
    }
}

/// Login outcome. The upstream answers 200 for both outcomes and signals
/// rejection in the body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: i64,
}

impl LoginResponse {
    /// Whether the credentials were accepted.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.message == "ok" && self.user_id != 0
    }
}

/// The full property record served to the detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDetails {
    pub property_id: i64,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub neighbourhood_cleansed: Option<String>,
    #[serde(default)]
    pub neighbourhood_group_cleansed: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub accommodates: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub beds: Option<f64>,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_accuracy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_cleanliness: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_checkin: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_communication: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_scores_value: Option<String>,
}

impl PropertyDetails {
    /// Human-readable amenities list.
    #[must_use]
    pub fn amenities_display(&self) -> String {
        self.amenities.as_deref().map(clean_amenities).unwrap_or_default()
    }

    /// Marker position, when the record carries coordinates.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Parse the amenities field out of its serialized form.
///
/// The upstream stores amenities as a JSON-ish string
/// (`["Wifi", "Kitchen", ...]`, occasionally with leaked `\u` escape
/// fragments). Strips the bracket/quote delimiters and turns escape fragments
/// into spaces.
#[must_use]
pub fn clean_amenities(raw: &str) -> String {
    raw.replace("\\u", " ")
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_and_rating_decode_from_numbers_or_strings() {
        let from_numbers: ListingSummary = serde_json::from_value(serde_json::json!({
            "property_id": 1, "price": 80.0, "rating": 4.5
        }))
        .unwrap();
        assert_eq!(from_numbers.price.as_deref(), Some("80"));
        assert_eq!(from_numbers.rating.as_deref(), Some("4.5"));

        let from_strings: ListingSummary = serde_json::from_value(serde_json::json!({
            "property_id": 2, "price": "80.0", "rating": "4.5"
        }))
        .unwrap();
        assert_eq!(from_strings.price.as_deref(), Some("80.0"));

        let nulls: ListingSummary =
            serde_json::from_value(serde_json::json!({"property_id": 3, "price": null}))
                .unwrap();
        assert!(nulls.price.is_none());
        assert!(nulls.rating.is_none());
    }

    #[test]
    fn search_decodes_single_or_list() {
        let one: SearchResponse =
            serde_json::from_value(serde_json::json!({"property_id": 7})).unwrap();
        assert_eq!(Vec::from(one).len(), 1);

        let many: SearchResponse =
            serde_json::from_value(serde_json::json!([{"property_id": 7}, {"property_id": 8}]))
                .unwrap();
        assert_eq!(Vec::from(many).len(), 2);

        let empty: SearchResponse = serde_json::from_value(serde_json::json!([])).unwrap();
        assert!(Vec::from(empty).is_empty());
    }

    #[test]
    fn login_success_requires_ok_and_a_user_id() {
        let ok: LoginResponse =
            serde_json::from_value(serde_json::json!({"message": "ok", "user_id": 42})).unwrap();
        assert!(ok.succeeded());

        let rejected: LoginResponse = serde_json::from_value(
            serde_json::json!({"message": "Invalid username or password,", "user_id": 0}),
        )
        .unwrap();
        assert!(!rejected.succeeded());
    }

    #[test]
    fn amenities_lose_their_delimiters() {
        assert_eq!(
            clean_amenities(r#"["Wifi", "Kitchen", "Air conditioning"]"#),
            "Wifi, Kitchen, Air conditioning"
        );
        assert_eq!(clean_amenities(r#"["Caf\u00e9"]"#), "Caf 00e9");
        assert_eq!(clean_amenities(""), "");
    }
}
