use libris_core::FeedConfig;

#[test]
fn test_feed_config_defaults() {
    let config = FeedConfig::default();
    assert_eq!(config.api_url, "http://localhost:8000");
}

#[test]
fn test_config_load_missing_file() {
    // Loading with a nonexistent file should still work (falls back to defaults + env)
    let result = FeedConfig::load(Some("/nonexistent/path/libris.toml"));
    assert!(result.is_ok(), "Should not fail with missing config file");
    assert_eq!(result.unwrap().api_url, "http://localhost:8000");
}
