//! Client for the listings/application API.

use serde::Serialize;
use tracing::debug;

use super::types::{ListingPage, ListingSummary, LoginResponse, PropertyDetails, SearchResponse};
use super::ApiError;

/// Query parameters for the paginated listings endpoint. The three filter
/// fields are the comma-joined serializations produced by
/// [`crate::browse::filters`].
#[derive(Debug, Clone, Serialize)]
pub struct ListingQuery {
    pub types: String,
    pub regions: String,
    pub accommodates: String,
    pub page: u32,
}

/// Typed wrapper over the listings service.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ListingsClient {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /properties` — the filtered, paginated listing query.
    pub async fn top_listings(&self, query: &ListingQuery) -> Result<ListingPage, ApiError> {
        debug!(page = query.page, "fetching listings page");
        self.http
            .get(self.url("/properties"))
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    /// `POST /login` — doubles as sign-up for unknown usernames.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    /// `POST /liked-properties` — the user's favourites.
    pub async fn favourites(&self, user_id: i64) -> Result<Vec<ListingSummary>, ApiError> {
        self.post_for_listings("/liked-properties", user_id).await
    }

    /// `POST /recommend` — personalised recommendations.
    pub async fn recommendations(&self, user_id: i64) -> Result<Vec<ListingSummary>, ApiError> {
        self.post_for_listings("/recommend", user_id).await
    }

    async fn post_for_listings(
        &self,
        path: &str,
        user_id: i64,
    ) -> Result<Vec<ListingSummary>, ApiError> {
        self.http
            .post(self.url(path))
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    /// `POST /search` — lookup by the raw user-entered id string. The
    /// upstream answers 404 for a miss, which surfaces here as a transport
    /// error and is degraded by the caller.
    pub async fn search(&self, pid: &str) -> Result<Vec<ListingSummary>, ApiError> {
        let response: SearchResponse = self
            .http
            .post(self.url("/search"))
            .json(&serde_json::json!({ "pid": pid }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .json()
            .await
            .map_err(ApiError::Decode)?;
        Ok(response.into())
    }

    /// `POST /properties/{id}/like` — flip the server-side like state. The
    /// response body is ignored.
    pub async fn toggle_like(&self, property_id: i64, user_id: i64) -> Result<(), ApiError> {
        self.http
            .post(self.url(&format!("/properties/{property_id}/like")))
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?;
        Ok(())
    }

    /// `POST /properties/{id}/details` — the full record for the detail
    /// page. Fetching with a positive viewer id also counts as a view
    /// upstream.
    pub async fn property_details(
        &self,
        property_id: i64,
        viewer_id: i64,
    ) -> Result<PropertyDetails, ApiError> {
        self.http
            .post(self.url(&format!("/properties/{property_id}/details")))
            .json(&serde_json::json!({ "user_id": viewer_id }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .json()
            .await
            .map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalised() {
        let client = ListingsClient::new(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(client.url("/properties"), "http://localhost:8000/properties");
    }

    #[test]
    fn listing_query_serialises_to_the_expected_params() {
        let query = ListingQuery {
            types: "Hotel room".to_string(),
            regions: "Central,East".to_string(),
            accommodates: "1-2,3-4".to_string(),
            page: 2,
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert!(encoded.contains("regions=Central%2CEast"));
        assert!(encoded.contains("page=2"));
    }
}
