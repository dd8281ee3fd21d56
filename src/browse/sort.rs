//! Page-local sorting of loaded listings.
//!
//! Sorting never crosses pages: it reorders whatever the last fetch returned.
//! The order is not persisted anywhere; it rides along as a query parameter.

use serde::{Deserialize, Serialize};

use crate::api::types::ListingSummary;

/// Sort order for the loaded grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Numeric rating, highest first. The default.
    #[default]
    Rating,
    /// Price, lowest first.
    PriceAsc,
    /// Price, highest first.
    PriceDesc,
}

impl SortOrder {
    /// Form value for round-tripping through fragment requests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

/// Parse a currency-formatted price string, ignoring everything that is not a
/// digit, dot, or minus sign. Unparseable or non-finite values count as zero.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Parse a rating value; missing or malformed ratings count as zero.
#[must_use]
pub fn parse_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|r| r.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Stable in-place sort of the loaded page.
pub fn sort_listings(listings: &mut [ListingSummary], order: SortOrder) {
    match order {
        SortOrder::Rating => listings.sort_by(|a, b| {
            parse_rating(b.rating.as_deref()).total_cmp(&parse_rating(a.rating.as_deref()))
        }),
        SortOrder::PriceAsc => listings.sort_by(|a, b| {
            parse_price(a.price.as_deref()).total_cmp(&parse_price(b.price.as_deref()))
        }),
        SortOrder::PriceDesc => listings.sort_by(|a, b| {
            parse_price(b.price.as_deref()).total_cmp(&parse_price(a.price.as_deref()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, price: &str, rating: Option<&str>) -> ListingSummary {
        ListingSummary {
            property_id: id,
            property_name: Some(format!("Listing {id}")),
            image_url: None,
            region: Some("Central".to_string()),
            room_type: Some("Private room".to_string()),
            accommodates: Some(2.0),
            price: Some(price.to_string()),
            rating: rating.map(ToString::to_string),
        }
    }

    #[test]
    fn price_parsing_strips_currency_formatting() {
        assert_eq!(parse_price(Some("$1,234.50")), 1234.50);
        assert_eq!(parse_price(Some("80")), 80.0);
        assert_eq!(parse_price(Some("SGD")), 0.0);
        assert_eq!(parse_price(None), 0.0);
    }

    #[test]
    fn missing_rating_counts_as_zero() {
        assert_eq!(parse_rating(None), 0.0);
        assert_eq!(parse_rating(Some("")), 0.0);
        assert_eq!(parse_rating(Some("4.85")), 4.85);
    }

    #[test]
    fn default_sort_is_rating_descending() {
        let mut page = vec![
            listing(1, "50", Some("3.0")),
            listing(2, "40", None),
            listing(3, "60", Some("4.9")),
        ];
        sort_listings(&mut page, SortOrder::Rating);
        let ids: Vec<i64> = page.iter().map(|l| l.property_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn price_sorts_run_both_directions() {
        let mut page = vec![
            listing(1, "$300", Some("1.0")),
            listing(2, "$100", Some("2.0")),
            listing(3, "$200", Some("3.0")),
        ];
        sort_listings(&mut page, SortOrder::PriceAsc);
        assert_eq!(page[0].property_id, 2);
        assert_eq!(page[2].property_id, 1);

        sort_listings(&mut page, SortOrder::PriceDesc);
        assert_eq!(page[0].property_id, 1);
        assert_eq!(page[2].property_id, 2);
    }

    #[test]
    fn equal_prices_keep_their_relative_order() {
        let mut page = vec![
            listing(10, "$100", Some("1.0")),
            listing(11, "$100", Some("2.0")),
            listing(12, "$100", Some("3.0")),
        ];
        sort_listings(&mut page, SortOrder::PriceAsc);
        let ids: Vec<i64> = page.iter().map(|l| l.property_id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }
}
