//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Largest reachable scroll offset.
pub fn max_scroll(window: &Window) -> f64 {
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (content - viewport_height(window)).max(0.0)
}

/// Smoothly scroll the section with `id` to the top of the viewport.
///
/// Does nothing if the element is missing.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Calendar year from the browser clock (for the footer copyright).
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
