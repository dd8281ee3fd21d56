//! Upstream service clients.
//!
//! The portal is a thin client over two remote JSON-over-HTTP services:
//!
//! - [`ListingsClient`]: the listings/application API (search, filters,
//!   favourites, recommendations, login, property details)
//! - [`ChatClient`]: the chat assistant API (plain-text replies)
//!
//! Both wrap a shared [`reqwest::Client`]. Read-path callers degrade failures
//! to an empty result set; only login surfaces an error to the user.

pub mod chat;
pub mod listings;
pub mod types;

pub use chat::ChatClient;
pub use listings::ListingsClient;

/// Errors from an upstream call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed, or the upstream answered with an error
    /// status.
    #[error("upstream request failed")]
    Transport(#[source] reqwest::Error),
    /// The upstream answered 2xx but the body did not match the expected
    /// shape.
    #[error("upstream response could not be decoded")]
    Decode(#[source] reqwest::Error),
}
