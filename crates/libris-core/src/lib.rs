#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod session;
pub mod stream;
pub mod types;

#[cfg(feature = "config")]
pub use config::FeedConfig;
pub use error::FeedError;
pub use session::*;
pub use stream::*;
pub use types::*;
