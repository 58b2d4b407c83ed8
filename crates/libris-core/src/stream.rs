use crate::error::FeedError;

pub const STREAM_PATH: &str = "/api/v1/sse/updates/stream";

/// Name of the SSE event carrying catalog operations.
pub const OPERATION_EVENT: &str = "bookOperation";

/// Builds the stream URL with the token percent-encoded into the query
/// string exactly once. Empty and whitespace-only tokens are rejected.
pub fn stream_url(base: &str, token: &str) -> Result<String, FeedError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(FeedError::EmptyToken);
    }
    let base = base.trim_end_matches('/');
    Ok(format!(
        "{base}{STREAM_PATH}?token={}",
        urlencoding::encode(token)
    ))
}
