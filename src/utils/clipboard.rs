//! Async Clipboard API access.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::dom;

/// Write `text` to the system clipboard.
///
/// Rejects when the page lacks clipboard permission or focus.
pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
