//! Price API response model and display formatting.
//!
//! The pair endpoint answers with `{ "pairs": [ { "marketCap": 1234.5, ... } ] }`.
//! `pairs` is `null` for unknown pairs, and entries carry dozens of fields we
//! never read, so entries stay as raw JSON and only the first one is inspected.

use serde::Deserialize;
use serde_json::Value;

/// Origin of the pair page and chart embed.
pub const DEXSCREENER_ORIGIN: &str = "https://dexscreener.com";

/// Embed query options: dark theme, market-cap candles on a 5 minute
/// interval, every toolbar and side panel turned off.
const EMBED_OPTIONS: &[(&str, &str)] = &[
    ("embed", "1"),
    ("loadChartSettings", "0"),
    ("tabs", "0"),
    ("info", "0"),
    ("chartLeftToolbar", "0"),
    ("chartTimeframesToolbar", "0"),
    ("chartTheme", "dark"),
    ("theme", "dark"),
    ("chartStyle", "1"),
    ("chartType", "marketCap"),
    ("interval", "5"),
];

/// Body of a pair lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<Value>>,
}

impl PairsResponse {
    /// Market cap of the first pair, if it is a usable number.
    ///
    /// Negative and non-numeric values (including numeric strings) count
    /// as missing.
    pub fn market_cap(&self) -> Option<f64> {
        self.pairs
            .as_deref()?
            .first()?
            .get("marketCap")?
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Format a market cap in millions (e.g., 1_234_567 -> "$1.23M").
pub fn format_market_cap(value: f64) -> String {
    format!("${:.2}M", value / 1_000_000.0)
}

/// Price API URL for a single pair.
pub fn pair_api_url(api_base: &str, chain: &str, pair: &str) -> String {
    format!("{}/{}/{}", api_base.trim_end_matches('/'), chain, pair)
}

/// Public pair page.
pub fn pair_page_url(chain: &str, pair: &str) -> String {
    format!("{}/{}/{}", DEXSCREENER_ORIGIN, chain, pair)
}

/// Chart iframe source for a pair.
pub fn chart_embed_url(chain: &str, pair: &str) -> String {
    let query = EMBED_OPTIONS
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", pair_page_url(chain, pair), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PairsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap(1_234_567.0), "$1.23M");
        assert_eq!(format_market_cap(2_000_000_000.0), "$2000.00M");
        assert_eq!(format_market_cap(0.0), "$0.00M");
        assert_eq!(format_market_cap(999.0), "$0.00M");
    }

    #[test]
    fn test_market_cap_first_pair() {
        let resp = parse(r#"{"pairs":[{"marketCap":1234567,"fdv":9},{"marketCap":1}]}"#);
        assert_eq!(resp.market_cap(), Some(1_234_567.0));
    }

    #[test]
    fn test_market_cap_float() {
        let resp = parse(r#"{"pairs":[{"marketCap":98765.4321}]}"#);
        assert_eq!(resp.market_cap(), Some(98765.4321));
    }

    #[test]
    fn test_market_cap_missing_shapes() {
        assert_eq!(parse(r#"{}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":null}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":[]}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":[{"priceUsd":"0.01"}]}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":[{"marketCap":"1234"}]}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":[{"marketCap":-5}]}"#).market_cap(), None);
        assert_eq!(parse(r#"{"pairs":[null]}"#).market_cap(), None);
    }

    #[test]
    fn test_malformed_later_entry_is_ignored() {
        let resp = parse(r#"{"pairs":[{"marketCap":42},"garbage",7]}"#);
        assert_eq!(resp.market_cap(), Some(42.0));
    }

    #[test]
    fn test_pair_api_url() {
        assert_eq!(
            pair_api_url("https://api.dexscreener.com/latest/dex/pairs/", "solana", "ABC"),
            "https://api.dexscreener.com/latest/dex/pairs/solana/ABC"
        );
    }

    #[test]
    fn test_chart_embed_url() {
        let url = chart_embed_url("solana", "ABC");
        assert!(url.starts_with("https://dexscreener.com/solana/ABC?embed=1&"));
        assert!(url.contains("chartType=marketCap"));
        assert!(url.contains("theme=dark"));
        assert!(url.ends_with("interval=5"));
        assert_eq!(url.matches("loadChartSettings").count(), 1);
    }
}
