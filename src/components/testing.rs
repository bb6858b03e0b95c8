//! Helpers for in-browser component tests.

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Mount `view` into a fresh container appended to the body.
///
/// The view stays mounted for the rest of the test run.
pub fn mount<F, N>(view: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let doc = document();
    let root = doc
        .create_element("div")
        .expect("create container")
        .unchecked_into::<HtmlElement>();
    doc.body()
        .expect("document has a body")
        .append_child(&root)
        .expect("attach container");

    mount_to(root.clone(), view).forget();
    root
}

/// First element under `root` carrying the given class.
pub fn find(root: &HtmlElement, class: &str) -> Option<HtmlElement> {
    root.query_selector(&format!(".{class}"))
        .ok()
        .flatten()
        .map(JsCast::unchecked_into)
}

/// Let queued reactive updates reach the DOM.
pub async fn settle() {
    TimeoutFuture::new(10).await;
}
