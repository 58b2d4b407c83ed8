use leptos::prelude::*;

#[server]
pub async fn get_api_url() -> Result<String, ServerFnError> {
    let config = libris_core::FeedConfig::load(std::env::var("LIBRIS_CONFIG").ok().as_deref())
        .map_err(|e| ServerFnError::new(format!("Config load: {e}")))?;
    Ok(config.api_url)
}
