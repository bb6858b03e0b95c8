//! Network fetching.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wynn_core::FetchError;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET a URL and return the body of a 2xx response.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}
