//! Rental Portal
//!
//! The browser-facing client of a rental-property listing service: a
//! listing/search/filter page and a property-detail page, both thin clients
//! over a remote listings API and a separate chat-assistant API.
//!
//! # Architecture
//!
//! - **Server**: Axum pages plus HTMX fragment endpoints
//! - **UI**: Leptos SSR components, HTML-first and inspectable
//! - **Upstream**: reqwest JSON clients for the two remote hosts
//! - **State**: cookie-keyed sessions (login, favourites, chat transcript);
//!   filter/page/sort state round-trips through request parameters
//!
//! # Modules
//!
//! - [`api`]: upstream service clients and wire types
//! - [`browse`]: filter, pagination, sort, and display-mode rules
//! - [`session`]: per-browser session state
//! - [`ui`]: SSR component tree

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod api;
pub mod browse;
pub mod config;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::api::{ChatClient, ListingsClient};
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Listings/application API client.
    pub listings: Arc<ListingsClient>,
    /// Chat assistant API client.
    pub chat: Arc<ChatClient>,
    /// Session store keyed by the `sid` cookie.
    pub sessions: SessionStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the shared state from configuration. The two clients share one
    /// connection pool.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        let http = reqwest::Client::new();
        Self {
            listings: Arc::new(ListingsClient::new(
                http.clone(),
                &config.upstream.listings_base_url,
            )),
            chat: Arc::new(ChatClient::new(http, &config.upstream.chat_base_url)),
            sessions: SessionStore::new(),
            config,
        }
    }
}
