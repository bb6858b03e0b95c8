//! Error types for the market-cap feed.
//!
//! Every variant is recoverable: a failed cycle leaves the displayed value
//! untouched and the next interval tick tries again.

use thiserror::Error;

/// Network/fetch-related errors for the price API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Body was not the expected JSON
    #[error("decode error: {0}")]
    Decode(String),
    /// Response parsed but carried no usable `pairs[0].marketCap`
    #[error("response has no market cap")]
    MissingMarketCap,
}
