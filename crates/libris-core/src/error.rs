use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Token must not be empty")]
    EmptyToken,

    #[error("Payload deserialization error: {0}")]
    Payload(#[from] serde_json::Error),
}
