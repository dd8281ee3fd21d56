//! End-to-end tests driving the portal router against stub upstream
//! services bound to ephemeral ports.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{Value, json};

use rental_portal::AppState;
use rental_portal::config::{AppConfig, ResilienceConfig, ServerConfig, UpstreamConfig};
use rental_portal::server;

fn listing_json() -> Value {
    json!({
        "property_id": 7,
        "property_name": "Cosy room near the river",
        "image_url": "http://img.example/7.jpg",
        "region": "Central",
        "room_type": "Private room",
        "accommodates": 2,
        "price": 80.0,
        "rating": "4.8"
    })
}

fn details_json() -> Value {
    json!({
        "property_id": 7,
        "property_name": "Cosy room near the river",
        "picture_url": "http://img.example/7.jpg",
        "neighbourhood_cleansed": "River Valley",
        "neighbourhood_group_cleansed": "Central Region",
        "latitude": 1.29,
        "longitude": 103.83,
        "property_type": "Rental unit",
        "room_type": "Private room",
        "accommodates": 2.0,
        "bathrooms": 1.0,
        "bedrooms": 1.0,
        "beds": 1.0,
        "amenities": "[\"Wifi\", \"Kitchen\"]",
        "price": 80.0,
        "review_scores_rating": "4.8",
        "review_scores_accuracy": "4.9",
        "review_scores_cleanliness": "4.7",
        "review_scores_checkin": "5.0",
        "review_scores_communication": "4.8",
        "review_scores_location": "4.6",
        "review_scores_value": "4.5"
    })
}

/// A healthy listings API with one property and a single known user.
fn stub_listings_api(total: u64) -> Router {
    Router::new()
        .route(
            "/properties",
            get(move || async move { Json(json!({ "total": total, "data": [listing_json()] })) }),
        )
        .route(
            "/login",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "alice" && body["password"] == "secret" {
                    Json(json!({ "message": "ok", "user_id": 42 }))
                } else {
                    Json(json!({ "message": "Invalid username or password,", "user_id": 0 }))
                }
            }),
        )
        .route(
            "/liked-properties",
            post(|| async { Json(json!([listing_json()])) }),
        )
        .route("/recommend", post(|| async { Json(json!([])) }))
        .route("/search", post(|| async { Json(json!([listing_json()])) }))
        .route(
            "/properties/{id}/like",
            post(|| async { Json(json!({ "message": "Success" })) }),
        )
        .route(
            "/properties/{id}/details",
            post(|| async { Json(details_json()) }),
        )
}

/// A listings API where every endpoint fails.
fn broken_listings_api() -> Router {
    Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })
}

fn stub_chat_api() -> Router {
    Router::new().route(
        "/chat",
        post(|| async {
            "Returning structured response: ResponseFormat(response='Two listings match', ids='7')"
        }),
    )
}

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn portal(listings: Router, chat: Router) -> TestServer {
    let listings_url = spawn_upstream(listings).await;
    let chat_url = spawn_upstream(chat).await;

    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        upstream: UpstreamConfig {
            listings_base_url: listings_url,
            chat_base_url: chat_url,
        },
        resilience: ResilienceConfig {
            timeout_disabled: false,
        },
    };

    let state = AppState::new(Arc::new(config));
    let mut server = TestServer::new(server::router(state)).unwrap();
    server.save_cookies();
    server
}

async fn sign_in(server: &TestServer) {
    let response = server
        .post("/fragments/login")
        .form(&[("username", "alice"), ("password", "secret")])
        .await;
    response.assert_status_ok();
    assert!(response.headers().contains_key("HX-Refresh"));
}

#[tokio::test]
async fn one_listing_fills_one_page_of_top_listings() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Top Listings"));
    assert!(body.contains("Private room in Central"));
    assert!(body.contains("Page 1 of 1"));
}

#[tokio::test]
async fn total_pages_round_up_and_the_page_param_is_kept() {
    let server = portal(stub_listings_api(25), stub_chat_api()).await;

    let response = server
        .get("/fragments/listings")
        .add_query_param("page", 3)
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Page 3 of 3"));
}

#[tokio::test]
async fn listings_failure_degrades_to_an_empty_grid() {
    let server = portal(broken_listings_api(), stub_chat_api()).await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    // Heading and pagination render as if there were zero matches.
    assert!(body.contains("Top Listings"));
    assert!(body.contains("Page 1 of 1"));
    assert!(!body.contains("Private room in Central"));
}

#[tokio::test]
async fn search_failure_still_shows_the_search_result_label() {
    let server = portal(broken_listings_api(), stub_chat_api()).await;

    let response = server
        .post("/fragments/search")
        .form(&[("pid", "whatever")])
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Search Result"));
    assert!(!body.contains("Private room in Central"));
}

#[tokio::test]
async fn search_hit_renders_the_listing() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;

    let response = server
        .post("/fragments/search")
        .form(&[("pid", " 7 ")])
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Search Result"));
    assert!(body.contains("Private room in Central"));
}

#[tokio::test]
async fn favourites_require_a_signed_in_session() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;

    let response = server.get("/fragments/favourites").await;
    response.assert_status_ok();

    // The swap is diverted into the sign-in modal instead of the grid.
    assert_eq!(
        response.headers().get("HX-Retarget").unwrap(),
        "#modal-root"
    );
    assert!(response.text().contains("Log in or Sign up"));
}

#[tokio::test]
async fn login_then_favourites_shows_the_liked_grid() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;
    sign_in(&server).await;

    let response = server.get("/fragments/favourites").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Your Favourites"));
    assert!(body.contains("Private room in Central"));
}

#[tokio::test]
async fn failed_login_re_renders_the_modal_and_stays_signed_out() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;

    let response = server
        .post("/fragments/login")
        .form(&[("username", "alice"), ("password", "wrong")])
        .await;
    response.assert_status_ok();

    assert!(!response.headers().contains_key("HX-Refresh"));
    assert!(
        response
            .text()
            .contains("Login failed. Please check your credentials.")
    );

    // Still treated as anonymous afterwards.
    let favourites = server.get("/fragments/favourites").await;
    assert!(favourites.headers().contains_key("HX-Retarget"));
}

#[tokio::test]
async fn liking_twice_flips_the_heart_back() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;
    sign_in(&server).await;

    // Seeded favourites contain listing 7; first post unlikes it locally.
    let first = server.post("/fragments/like/7").await;
    first.assert_status_ok();
    let second = server.post("/fragments/like/7").await;
    second.assert_status_ok();

    // Seeded state was liked, so the second post restores the liked fill.
    assert_ne!(first.text(), second.text());
    assert!(!first.text().contains("223, 16, 71"));
    assert!(second.text().contains("223, 16, 71"));
}

#[tokio::test]
async fn chat_round_trip_cleans_the_reply() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;
    sign_in(&server).await;

    let response = server
        .post("/fragments/chat")
        .form(&[("prompt", "anything nearby?")])
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("anything nearby?"));
    assert!(body.contains("Two listings match, ids=7"));
    assert!(!body.contains("ResponseFormat"));
}

#[tokio::test]
async fn chat_failure_appends_the_apology() {
    let server = portal(stub_listings_api(1), broken_listings_api()).await;
    sign_in(&server).await;

    let response = server
        .post("/fragments/chat")
        .form(&[("prompt", "hello")])
        .await;
    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("An error occurred, please try again")
    );
}

#[tokio::test]
async fn detail_page_renders_metrics_amenities_and_map() {
    let server = portal(stub_listings_api(1), stub_chat_api()).await;

    let response = server.get("/properties/7").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Cosy room near the river"));
    assert!(body.contains("Cleanliness"));
    assert!(body.contains("Wifi, Kitchen"));
    assert!(body.contains("listing-map"));
    assert!(body.contains("[1.29, 103.83]"));
}

#[tokio::test]
async fn detail_fetch_failure_renders_the_empty_state() {
    let server = portal(broken_listings_api(), stub_chat_api()).await;

    let response = server.get("/properties/7").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("could not be loaded"));
    assert!(!body.contains("listing-map"));
}
