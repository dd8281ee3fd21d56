use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use axum_extra::extract::Query;
use leptos::prelude::*;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::listings::ListingQuery;
use crate::api::types::ListingSummary;
use crate::api::chat::clean_reply;
use crate::browse::pagination;
use crate::browse::sort::sort_listings;
use crate::browse::{DisplayMode, FilterSelection, SortOrder, StayDuration};
use crate::config::AppConfig;
use crate::session::Session;
use crate::ui;
use crate::ui::browse::{BrowseContent, BrowseView, FavouriteToggle, FilterSidebar, SignInModal};
use crate::ui::chat::ChatMessageList;
use crate::AppState;

/// Cookie carrying the session id.
const SESSION_COOKIE: &str = "sid";

/// Fixed bot reply appended when the chat upstream fails.
const CHAT_ERROR_REPLY: &str = "An error occurred, please try again";

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "upstream.config.loaded",
        listings = %config.upstream.listings_base_url,
        chat = %config.upstream.chat_base_url,
        "Upstream configuration loaded"
    );

    let state = AppState::new(Arc::clone(&config));
    let app = router(state);

    // A very large timeout stands in for "disabled" so the router type stays
    // the same either way.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(30)
    };
    let app = app.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| {
            let duration = timeout_duration;
            async move {
                match tokio::time::timeout(duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            }
        },
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router. Exposed separately so tests can drive it
/// without binding a socket.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(browse_page))
        .route("/properties/{id}", get(property_page))
        // HTMX fragments
        .route("/fragments/listings", get(listings_fragment))
        .route("/fragments/sidebar", get(sidebar_fragment))
        .route("/fragments/search", post(search_fragment))
        .route("/fragments/favourites", get(favourites_fragment))
        .route("/fragments/recommendations", get(recommendations_fragment))
        .route("/fragments/signin", get(signin_fragment))
        .route("/fragments/login", post(login_fragment))
        .route("/fragments/logout", post(logout_fragment))
        .route("/fragments/like/{id}", post(like_fragment))
        .route("/fragments/chat", post(chat_fragment))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Session plumbing
// ─────────────────────────────────────────────────────────────────────────────

/// Look up the caller's session, lazily creating one (and its cookie) for
/// unknown or missing ids.
fn resolve_session(state: &AppState, jar: CookieJar) -> (Session, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(session) = state.sessions.get(cookie.value()) {
            return (session, jar);
        }
    }
    let session = state.sessions.create();
    let cookie = Cookie::build((SESSION_COOKIE, session.id().to_string()))
        .path("/")
        .http_only(true)
        .build();
    (session, jar.add(cookie))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Filter/sort/page state round-tripped through every listings fragment.
#[derive(Debug, Deserialize)]
struct BrowseParams {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default)]
    accommodates: Vec<String>,
    #[serde(default)]
    duration: StayDuration,
    #[serde(default)]
    sort: SortOrder,
    #[serde(default = "default_page")]
    page: u32,
}

fn default_page() -> u32 {
    1
}

impl BrowseParams {
    fn selection(&self) -> FilterSelection {
        FilterSelection::from_params(&self.types, &self.regions, &self.accommodates, self.duration)
    }
}

/// Body of the search form: the raw id string plus the sort to apply.
#[derive(Debug, Deserialize)]
struct SearchForm {
    pid: String,
    #[serde(default)]
    sort: SortOrder,
}

/// Sort-only parameters for the favourites/recommendations fragments.
#[derive(Debug, Deserialize)]
struct SortParams {
    #[serde(default)]
    sort: SortOrder,
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct ChatForm {
    prompt: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - the listing browser, loaded with page 1 of the default filters.
async fn browse_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = resolve_session(&state, jar);

    let selection = FilterSelection::default();
    let sort = SortOrder::default();
    let (listings, page, total_pages) = load_top_listings(&state, &selection, sort, 1).await;

    let view = BrowseView {
        selection,
        sort,
        mode: DisplayMode::TopListings,
        listings,
        page,
        total_pages,
        signed_in: session.is_signed_in(),
        favourites: session.favourites(),
        pid: None,
    };

    let html = ui::app::browse_page(view, session.transcript());
    (jar, Html(html)).into_response()
}

/// GET /properties/{id} - the property detail page. A failed fetch renders
/// the empty-state card; the upstream also counts the view when the session
/// carries a signed-in viewer.
async fn property_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);

    let details = match state.listings.property_details(id, session.viewer_id()).await {
        Ok(details) => Some(details),
        Err(error) => {
            warn!(error = %error, property_id = id, "property details fetch failed");
            None
        }
    };

    (jar, Html(ui::app::property_page(details))).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing fragments
// ─────────────────────────────────────────────────────────────────────────────

/// GET /fragments/listings - apply filters/sort/page and re-render the grid.
async fn listings_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<BrowseParams>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);

    let selection = params.selection();
    let requested = params.page.max(1);
    let (listings, page, total_pages) =
        load_top_listings(&state, &selection, params.sort, requested).await;

    let view = BrowseView {
        selection,
        sort: params.sort,
        mode: DisplayMode::TopListings,
        listings,
        page,
        total_pages,
        signed_in: session.is_signed_in(),
        favourites: session.favourites(),
        pid: None,
    };

    (jar, render_browse(view)).into_response()
}

/// GET /fragments/sidebar - re-render just the sidebar, so a stay-duration
/// change can lock the house-type group without reloading listings.
async fn sidebar_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<BrowseParams>,
) -> Response {
    let (_, jar) = resolve_session(&state, jar);

    let selection = params.selection();
    let html = view! {
        <FilterSidebar
            selection=selection
            sort=params.sort
            mode=DisplayMode::TopListings
            page=params.page
            pid=None
        />
    }
    .to_html();

    (jar, Html(html)).into_response()
}

/// POST /fragments/search - lookup by the raw user-entered id string. Any
/// failure (including a miss, which the upstream answers with 404) renders
/// an empty grid still labeled "Search Result".
async fn search_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);

    let pid = form.pid.trim().to_string();
    let mut listings = match state.listings.search(&pid).await {
        Ok(listings) => listings,
        Err(error) => {
            warn!(error = %error, pid = %pid, "search failed, rendering empty result");
            Vec::new()
        }
    };
    sort_listings(&mut listings, form.sort);

    let view = BrowseView {
        selection: FilterSelection::default(),
        sort: form.sort,
        mode: DisplayMode::SearchResult,
        listings,
        page: 1,
        total_pages: 1,
        signed_in: session.is_signed_in(),
        favourites: session.favourites(),
        pid: Some(pid),
    };

    (jar, render_browse(view)).into_response()
}

/// GET /fragments/favourites - the signed-in user's liked listings. Also
/// resyncs the local favourites set with what the server returned.
async fn favourites_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SortParams>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    let Some(user_id) = session.user_id() else {
        return (jar, signin_redirect()).into_response();
    };

    let mut listings = match state.listings.favourites(user_id).await {
        Ok(listings) => {
            session.set_favourites(listings.iter().map(|l| l.property_id).collect());
            listings
        }
        Err(error) => {
            warn!(error = %error, user_id, "favourites fetch failed, rendering empty grid");
            Vec::new()
        }
    };
    sort_listings(&mut listings, params.sort);

    let view = dataset_view(DisplayMode::Favourites, listings, params.sort, &session);
    (jar, render_browse(view)).into_response()
}

/// GET /fragments/recommendations - personalised recommendations for the
/// signed-in user.
async fn recommendations_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SortParams>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    let Some(user_id) = session.user_id() else {
        return (jar, signin_redirect()).into_response();
    };

    let mut listings = match state.listings.recommendations(user_id).await {
        Ok(listings) => listings,
        Err(error) => {
            warn!(error = %error, user_id, "recommendations fetch failed, rendering empty grid");
            Vec::new()
        }
    };
    sort_listings(&mut listings, params.sort);

    let view = dataset_view(DisplayMode::Recommended, listings, params.sort, &session);
    (jar, render_browse(view)).into_response()
}

/// POST /fragments/like/{id} - fire the upstream like/unlike and flip local
/// membership regardless of the outcome, answering with the re-rendered
/// heart.
async fn like_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    let Some(user_id) = session.user_id() else {
        return (jar, signin_redirect()).into_response();
    };

    if let Err(error) = state.listings.toggle_like(id, user_id).await {
        warn!(error = %error, property_id = id, "like request failed; keeping the local flip");
    }
    let liked = session.toggle_favourite(id);

    let html = view! { <FavouriteToggle property_id=id liked=liked/> }.to_html();
    (jar, Html(html)).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Account fragments
// ─────────────────────────────────────────────────────────────────────────────

/// GET /fragments/signin - the sign-in modal.
async fn signin_fragment(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (_, jar) = resolve_session(&state, jar);
    (jar, Html(signin_modal_html(None))).into_response()
}

/// POST /fragments/login - submit credentials. Success stores the user id,
/// seeds the favourites badges, and refreshes the page; failure re-renders
/// the modal with a blocking notice and leaves the session signed out.
async fn login_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);

    match state.listings.login(&form.username, &form.password).await {
        Ok(response) if response.succeeded() => {
            let favourites = match state.listings.favourites(response.user_id).await {
                Ok(listings) => listings.iter().map(|l| l.property_id).collect(),
                Err(error) => {
                    warn!(error = %error, "favourites seed failed after login");
                    Vec::new()
                }
            };
            session.sign_in(response.user_id, favourites);
            info!(user_id = response.user_id, "user signed in");
            (jar, [("HX-Refresh", "true")], Html(String::new())).into_response()
        }
        Ok(response) => {
            info!(message = %response.message, "login rejected");
            (jar, login_failed_modal()).into_response()
        }
        Err(error) => {
            warn!(error = %error, "login request failed");
            (jar, login_failed_modal()).into_response()
        }
    }
}

/// POST /fragments/logout - clear the login flag and user id. Nothing else
/// is touched; requests already in flight complete as the old viewer.
async fn logout_fragment(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    session.sign_out();
    info!("user signed out");
    (jar, [("HX-Refresh", "true")], Html(String::new())).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat fragment
// ─────────────────────────────────────────────────────────────────────────────

/// POST /fragments/chat - append the prompt, ask the assistant, append the
/// cleaned reply (or the fixed apology on failure), and re-render the
/// transcript.
async fn chat_fragment(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ChatForm>,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    if !session.is_signed_in() {
        return (jar, signin_redirect()).into_response();
    }

    let prompt = form.prompt.trim().to_string();
    if !prompt.is_empty() {
        session.push_user_message(&prompt);
        match state.chat.ask(session.viewer_id(), &prompt).await {
            Ok(raw) => session.push_bot_message(clean_reply(&raw)),
            Err(error) => {
                warn!(error = %error, "chat request failed");
                session.push_bot_message(CHAT_ERROR_REPLY);
            }
        }
    }

    let html = view! { <ChatMessageList transcript=session.transcript()/> }.to_html();
    (jar, Html(html)).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch one page of top listings. Failures degrade to an empty grid with
/// the page count reset, never to an error page.
async fn load_top_listings(
    state: &AppState,
    selection: &FilterSelection,
    sort: SortOrder,
    page: u32,
) -> (Vec<ListingSummary>, u32, u32) {
    let query = ListingQuery {
        types: selection.house_types.to_query_string(),
        regions: selection.regions.to_query_string(),
        accommodates: selection.accommodates.to_query_string(),
        page,
    };

    match state.listings.top_listings(&query).await {
        Ok(listing_page) => {
            let total_pages = pagination::total_pages(listing_page.total);
            let display_page = pagination::clamp_page(page, total_pages);
            let mut listings = listing_page.data;
            sort_listings(&mut listings, sort);
            (listings, display_page, total_pages)
        }
        Err(error) => {
            warn!(error = %error, "listings fetch failed, rendering empty grid");
            (Vec::new(), 1, 1)
        }
    }
}

/// View over a non-paginated dataset (favourites, recommendations).
fn dataset_view(
    mode: DisplayMode,
    listings: Vec<ListingSummary>,
    sort: SortOrder,
    session: &Session,
) -> BrowseView {
    BrowseView {
        selection: FilterSelection::default(),
        sort,
        mode,
        listings,
        page: 1,
        total_pages: 1,
        signed_in: session.is_signed_in(),
        favourites: session.favourites(),
        pid: None,
    }
}

fn render_browse(view: BrowseView) -> Html<String> {
    Html(view! { <BrowseContent view=view/> }.to_html())
}

fn signin_modal_html(error: Option<&'static str>) -> String {
    view! { <SignInModal error=error/> }.to_html()
}

/// Divert an HTMX request into the sign-in flow: retarget the swap at the
/// modal root instead of the grid.
fn signin_redirect() -> Response {
    (
        [("HX-Retarget", "#modal-root"), ("HX-Reswap", "innerHTML")],
        Html(signin_modal_html(None)),
    )
        .into_response()
}

fn login_failed_modal() -> Html<String> {
    Html(signin_modal_html(Some(
        "Login failed. Please check your credentials.",
    )))
}
