use libris_core::{FeedError, STREAM_PATH, stream_url};

#[test]
fn test_stream_url_embeds_token() {
    let url = stream_url("http://localhost:8000", "abc123").unwrap();
    assert_eq!(
        url,
        "http://localhost:8000/api/v1/sse/updates/stream?token=abc123"
    );
}

#[test]
fn test_stream_url_percent_encodes_token() {
    let url = stream_url("http://localhost:8000", "a b/c&d=e").unwrap();
    assert_eq!(
        url,
        "http://localhost:8000/api/v1/sse/updates/stream?token=a%20b%2Fc%26d%3De"
    );
}

#[test]
fn test_stream_url_contains_token_exactly_once() {
    let url = stream_url("http://localhost:8000", "abc123").unwrap();
    assert_eq!(url.matches("abc123").count(), 1);
}

#[test]
fn test_stream_url_trims_trailing_base_slash() {
    let url = stream_url("http://localhost:8000/", "t").unwrap();
    assert_eq!(url, format!("http://localhost:8000{STREAM_PATH}?token=t"));
}

#[test]
fn test_stream_url_trims_token_whitespace() {
    let url = stream_url("http://localhost:8000", "  abc123  ").unwrap();
    assert!(url.ends_with("?token=abc123"));
}

#[test]
fn test_stream_url_rejects_empty_token() {
    let result = stream_url("http://localhost:8000", "");
    assert!(matches!(result, Err(FeedError::EmptyToken)));
}

#[test]
fn test_stream_url_rejects_whitespace_only_token() {
    let result = stream_url("http://localhost:8000", " \t ");
    assert!(matches!(result, Err(FeedError::EmptyToken)));
}

#[test]
fn test_stream_url_with_empty_base_is_relative() {
    let url = stream_url("", "abc123").unwrap();
    assert_eq!(url, "/api/v1/sse/updates/stream?token=abc123");
}
