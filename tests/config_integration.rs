use rental_portal::config::AppConfig;
use serial_test::serial;
use std::env;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("RENTAL_SERVER__PORT");
        env::remove_var("RENTAL_UPSTREAM__LISTINGS_BASE_URL");
        env::remove_var("PORT");
        env::remove_var("LISTINGS_API_URL");
        env::remove_var("CHAT_API_URL");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["rental-portal"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.upstream.listings_base_url, "http://localhost:8000");
    assert_eq!(config.upstream.chat_base_url, "http://localhost:8001");
    assert!(!config.resilience.timeout_disabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("RENTAL_SERVER__PORT", "9090");
        env::set_var("RENTAL_UPSTREAM__LISTINGS_BASE_URL", "http://listings:8000");
    }

    let config = AppConfig::load_from_args(["rental-portal"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.upstream.listings_base_url, "http://listings:8000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_override() {
    clear_env_vars();

    let config = AppConfig::load_from_args([
        "rental-portal",
        "--port",
        "7070",
        "--chat-api-url",
        "http://chat:9001",
    ])
    .expect("Failed to load config");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.upstream.chat_base_url, "http://chat:9001");
}
